use anyhow::Result;
use rand::{Rng, RngCore};

use ascon_suite::{
    decrypt,
    decrypt_in_place_detached,
    encrypt,
    encrypt_in_place_detached,
    AeadVariant,
    Ascon128Cipher,
    Ascon128aCipher,
    Ascon80pqCipher,
    Error,
};

const LENGTHS: [usize; 11] = [0, 1, 7, 8, 9, 15, 16, 17, 63, 64, 65];

struct Material {
    key: Vec<u8>,
    nonce: Vec<u8>,
    associated_data: Vec<u8>,
    plaintext: Vec<u8>,
}

fn material(variant: AeadVariant, ad_len: usize, pt_len: usize) -> Material {
    let mut rng = rand::thread_rng();
    let mut fill = |n: usize| {
        let mut v = vec![0_u8; n];
        rng.fill_bytes(&mut v);
        v
    };
    Material {
        key: fill(variant.params().key_size_bytes),
        nonce: fill(16),
        associated_data: fill(ad_len),
        plaintext: fill(pt_len),
    }
}

#[test]
fn round_trips_at_every_block_boundary() -> Result<()> {
    for variant in AeadVariant::ALL.iter().copied() {
        for ad_len in LENGTHS.iter().copied() {
            for pt_len in LENGTHS.iter().copied() {
                let m = material(variant, ad_len, pt_len);
                let ct = encrypt(variant, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;
                assert_eq!(ct.len(), pt_len + 16);
                let pt = decrypt(variant, &m.key, &m.nonce, &m.associated_data, &ct)?;
                assert_eq!(pt, m.plaintext, "{} ad={} pt={}", variant, ad_len, pt_len);
            }
        }
    }
    Ok(())
}

#[test]
fn every_single_bit_flip_is_rejected() -> Result<()> {
    for variant in AeadVariant::ALL.iter().copied() {
        let m = material(variant, 9, 17);
        let ct = encrypt(variant, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;

        for i in 0..ct.len() * 8 {
            let mut tampered = ct.clone();
            tampered[i / 8] ^= 1 << (i % 8);
            let res = decrypt(variant, &m.key, &m.nonce, &m.associated_data, &tampered);
            assert_eq!(res, Err(Error::BadTag), "{}: ciphertext bit {}", variant, i);
        }
        for i in 0..m.associated_data.len() * 8 {
            let mut ad = m.associated_data.clone();
            ad[i / 8] ^= 1 << (i % 8);
            let res = decrypt(variant, &m.key, &m.nonce, &ad, &ct);
            assert_eq!(res, Err(Error::BadTag), "{}: associated data bit {}", variant, i);
        }
        for i in 0..m.key.len() * 8 {
            let mut key = m.key.clone();
            key[i / 8] ^= 1 << (i % 8);
            let res = decrypt(variant, &key, &m.nonce, &m.associated_data, &ct);
            assert_eq!(res, Err(Error::BadTag), "{}: key bit {}", variant, i);
        }
        for i in 0..m.nonce.len() * 8 {
            let mut nonce = m.nonce.clone();
            nonce[i / 8] ^= 1 << (i % 8);
            let res = decrypt(variant, &m.key, &nonce, &m.associated_data, &ct);
            assert_eq!(res, Err(Error::BadTag), "{}: nonce bit {}", variant, i);
        }
    }
    Ok(())
}

#[test]
fn truncated_or_extended_ciphertexts_are_rejected() -> Result<()> {
    let variant = AeadVariant::Ascon128a;
    let m = material(variant, 3, 20);
    let ct = encrypt(variant, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;

    let res = decrypt(variant, &m.key, &m.nonce, &m.associated_data, &ct[..ct.len() - 1]);
    assert!(res.unwrap_err().is_authentication_failure());

    let mut longer = ct.clone();
    longer.push(0);
    let res = decrypt(variant, &m.key, &m.nonce, &m.associated_data, &longer);
    assert!(res.unwrap_err().is_authentication_failure());

    let res = decrypt(variant, &m.key, &m.nonce, &m.associated_data, &ct[..15]);
    assert_eq!(res, Err(Error::CiphertextTooShort(16, 15)));
    Ok(())
}

#[test]
fn encryption_is_deterministic_and_nonce_dependent() -> Result<()> {
    for variant in AeadVariant::ALL.iter().copied() {
        let m = material(variant, 5, 33);
        let a = encrypt(variant, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;
        let b = encrypt(variant, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;
        assert_eq!(a, b);

        let mut nonce = m.nonce.clone();
        nonce[rand::thread_rng().gen_range(0..16)] ^= 0x01;
        let c = encrypt(variant, &m.key, &nonce, &m.associated_data, &m.plaintext)?;
        assert_ne!(a, c);
    }
    Ok(())
}

#[test]
fn variants_are_not_interchangeable() -> Result<()> {
    let m = material(AeadVariant::Ascon128, 4, 4);
    let ct = encrypt(AeadVariant::Ascon128, &m.key, &m.nonce, &m.associated_data, &m.plaintext)?;
    let res = decrypt(AeadVariant::Ascon128a, &m.key, &m.nonce, &m.associated_data, &ct);
    assert_eq!(res, Err(Error::BadTag));
    Ok(())
}

#[test]
fn in_place_buffers_round_trip() -> Result<()> {
    for variant in AeadVariant::ALL.iter().copied() {
        for len in LENGTHS.iter().copied() {
            let m = material(variant, len, len);
            let mut buffer = m.plaintext.clone();
            let tag = encrypt_in_place_detached(variant, &m.key, &m.nonce, &m.associated_data, &mut buffer)?;
            decrypt_in_place_detached(variant, &m.key, &m.nonce, &m.associated_data, &mut buffer, &tag)?;
            assert_eq!(buffer, m.plaintext);
        }
    }
    Ok(())
}

#[test]
fn published_demo_vector() -> Result<()> {
    let key = hex::decode("8A55114D1CB6A9A2BE263D4D7AECAAFF")?;
    let nonce = hex::decode("4ED0EC0B98C529B7C8CDDF37BCD0284A")?;
    let plaintext = hex::decode("5A5B5B5A5A5A5A5A59554E4A4C4F5455")?;

    let cipher = Ascon128Cipher::new(&key)?;
    let ct = cipher.encrypt(&nonce, b"A to B", &plaintext)?;
    assert_eq!(
        hex::encode_upper(&ct),
        "2014293975F92C24277A15BF4F42C62EE6A9E8509DFC9F2C994CE651C96A4C87"
    );
    assert_eq!(cipher.decrypt(&nonce, b"A to B", &ct)?, plaintext);
    Ok(())
}

#[test]
fn typed_ciphers_check_their_key_size() {
    assert_eq!(
        Ascon80pqCipher::new(&[0; 16]).unwrap_err(),
        Error::KeyLength("Ascon-80pq", 20, 16)
    );
    assert!(Ascon128aCipher::new(&[0; 20]).is_err());
    assert!(Ascon128aCipher::new(&[0; 16]).is_ok());
}
