/*
Peppered password hashing. The pepper is a server wide secret that
gets fed to argon2 as its keying secret, so stored hashes are
useless without both the database row and the process environment.
*/
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use std::env;

pub fn pepper() -> String {
    return env::var("GN_PEPPER").unwrap_or_else(|_| "good-neighbor-dev-pepper".to_owned());
}

fn peppered_hasher(pepper: &str) -> Argon2<'_> {
    Argon2::new_with_secret(
        pepper.as_bytes(),
        Algorithm::Argon2id,
        Version::V0x13,
        Params::default(),
    )
    .expect("invalid argon2 configuration")
}

pub fn hash_password(password: &str, pepper: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let hash = peppered_hasher(pepper)
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash password");
    return hash.to_string();
}

pub fn verify_password(password: &str, pepper: &str, stored_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::error!("failed to parse stored password hash: {}", err);
            return false;
        }
    };
    return peppered_hasher(pepper)
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
}
