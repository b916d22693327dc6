use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;
use uuid::Uuid;

/// Per-site editor secret. Generated once at site creation, stored only as
/// an argon2 hash, compared by hash on every editor request. The plaintext
/// is never redisplayable.
pub struct TokenManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

impl TokenManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            )
            .expect("Invalid Argon2 parameters");

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn generate() -> String {
        format!(
            "sb_{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        )
    }

    pub fn hash_token(token: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(token.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_token(token: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(token.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
