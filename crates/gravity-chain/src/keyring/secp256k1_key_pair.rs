use bip39::{Language, Mnemonic, Seed};
use bitcoin::network::constants::Network;
use bitcoin::secp256k1::Secp256k1;
use bitcoin::util::bip32::{DerivationPath, ExtendedPrivKey, ExtendedPubKey};
use hdpath::StandardHDPath;
use k256::ecdsa::{signature::Signer, Signature, SigningKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::errors::Error;
use crate::types::address::{AccountId, ADDRESS_LENGTH};

/// A secp256k1 signing key pair derived from a BIP-39 mnemonic through the
/// standard BIP-32 path.
#[derive(Clone, Debug)]
pub struct Secp256k1KeyPair {
    private_key: ExtendedPrivKey,
    public_key: ExtendedPubKey,
}

impl Secp256k1KeyPair {
    pub fn from_mnemonic(mnemonic_words: &str, hd_path: &StandardHDPath) -> Result<Self, Error> {
        let private_key = private_key_from_mnemonic(mnemonic_words, hd_path)?;
        let public_key = ExtendedPubKey::from_private(&Secp256k1::new(), &private_key);

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// The compressed (33-byte) SEC1 encoding of the public key.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.public_key.to_bytes()
    }

    /// The account address: `ripemd160(sha256(compressed_pubkey))`.
    pub fn address(&self) -> AccountId {
        let pk_hash = Sha256::digest(self.public_key_bytes());
        let rip_result = Ripemd160::digest(pk_hash);

        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&rip_result);
        AccountId::new(bytes)
    }

    /// Sign a message, returning the raw 64-byte `r || s` signature.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let private_key_bytes = self.private_key.private_key.to_bytes();
        let signing_key =
            SigningKey::from_bytes(private_key_bytes.as_slice()).map_err(Error::invalid_key_bytes)?;

        let signature: Signature = signing_key.sign(message);
        Ok(signature.as_ref().to_vec())
    }
}

/// Decode an extended private key from a mnemonic.
fn private_key_from_mnemonic(
    mnemonic_words: &str,
    hd_path: &StandardHDPath,
) -> Result<ExtendedPrivKey, Error> {
    let mnemonic =
        Mnemonic::from_phrase(mnemonic_words, Language::English).map_err(Error::invalid_mnemonic)?;

    let seed = Seed::new(&mnemonic, "");

    let private_key = ExtendedPrivKey::new_master(Network::Bitcoin, seed.as_bytes())
        .and_then(|k| k.derive_priv(&Secp256k1::new(), &DerivationPath::from(hd_path.clone())))
        .map_err(Error::bip32_key_generation_failed)?;

    Ok(private_key)
}

/// Parse the textual form of the standard derivation path.
pub fn standard_hd_path(path: &str) -> Result<StandardHDPath, Error> {
    StandardHDPath::try_from(path).map_err(|_| Error::invalid_hd_path(path.to_string()))
}

#[cfg(test)]
mod tests {
    use k256::ecdsa::signature::Verifier;
    use k256::ecdsa::{Signature, VerifyingKey};

    use super::*;
    use crate::keyring::DEFAULT_HD_PATH;

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn key_pair() -> Secp256k1KeyPair {
        let hd_path = standard_hd_path(DEFAULT_HD_PATH).unwrap();
        Secp256k1KeyPair::from_mnemonic(MNEMONIC, &hd_path).unwrap()
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = key_pair();
        let b = key_pair();

        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
        assert_eq!(a.address(), b.address());
        assert_eq!(a.public_key_bytes().len(), 33);
    }

    #[test]
    fn signatures_verify_under_the_public_key() {
        let key_pair = key_pair();
        let message = b"gentx sign bytes";

        let signature = key_pair.sign(message).unwrap();
        assert_eq!(signature.len(), 64);

        let verifying_key = VerifyingKey::from_sec1_bytes(&key_pair.public_key_bytes()).unwrap();
        let signature = Signature::try_from(signature.as_slice()).unwrap();
        assert!(verifying_key.verify(message, &signature).is_ok());
    }

    #[test]
    fn rejects_invalid_mnemonics() {
        let hd_path = standard_hd_path(DEFAULT_HD_PATH).unwrap();
        let result = Secp256k1KeyPair::from_mnemonic("not a valid mnemonic", &hd_path);
        assert!(result.is_err());
    }
}
