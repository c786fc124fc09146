use std::path::Path;

use fastrace::trace;
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use rolodex_types::User;
use thiserror::Error;
use tracing::{debug, error, warn};

mod seed;

pub use seed::seed_users;

const USERS_KEY: &str = "users";

// Serialized avatars longer than this are dropped when the store runs out of space.
const AVATAR_KEEP_LIMIT: usize = 1000;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("LMDB error: {0}")]
    Lmdb(#[from] heed::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The whole user collection lives as one JSON value under a fixed key, in an
/// LMDB environment whose map size acts as the storage quota.
pub struct UserStore {
    env: Env,
    db: Database<Str, Str>,
    max_bytes: u64,
}

impl UserStore {
    pub fn open(path: &Path, max_bytes: u64) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path)?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(max_bytes as usize)
                .max_dbs(1)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, None)?;
        wtxn.commit()?;

        Ok(Self { env, db, max_bytes })
    }

    #[trace]
    pub fn load(&self) -> Vec<User> {
        let stored = match self.read_raw() {
            Ok(stored) => stored,
            Err(err) => {
                error!("Failed to read user store: {}", err);
                return Vec::new();
            }
        };

        match stored {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(err) => {
                    error!("Stored user data is corrupt, starting empty: {}", err);
                    Vec::new()
                }
            },
            None => seed::seed_users(),
        }
    }

    #[trace]
    pub fn save(&self, users: &[User]) {
        let serialized = match serde_json::to_string(users) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!("Failed to serialize users: {}", err);
                return;
            }
        };

        match self.write_raw(&serialized) {
            Ok(()) => {}
            Err(err) if is_capacity_error(&err) => {
                warn!(
                    "User store exceeded its {} byte quota, dropping large avatars",
                    self.max_bytes
                );
                self.save_without_large_avatars(users);
            }
            Err(err) => {
                error!("Failed to save users: {}", err);
            }
        }
    }

    pub fn update_avatar(&self, user_id: u64, avatar: &str) {
        let mut users = self.load();
        let Some(user) = users.iter_mut().find(|user| user.id == user_id) else {
            debug!("No user with id {}, avatar not updated", user_id);
            return;
        };
        user.avatar = Some(avatar.to_string());
        self.save(&users);
    }

    fn save_without_large_avatars(&self, users: &[User]) {
        let stripped: Vec<User> = users
            .iter()
            .cloned()
            .map(|mut user| {
                let too_large = user
                    .avatar
                    .as_ref()
                    .is_some_and(|avatar| avatar.len() > AVATAR_KEEP_LIMIT);
                if too_large {
                    user.avatar = None;
                }
                user
            })
            .collect();

        let serialized = match serde_json::to_string(&stripped) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!("Failed to serialize users: {}", err);
                return;
            }
        };
        if let Err(err) = self.write_raw(&serialized) {
            error!("Failed to save users after dropping avatars: {}", err);
        }
    }

    fn read_raw(&self) -> Result<Option<String>, heed::Error> {
        let rtxn = self.env.read_txn()?;
        Ok(self.db.get(&rtxn, USERS_KEY)?.map(|raw| raw.to_string()))
    }

    fn write_raw(&self, serialized: &str) -> Result<(), heed::Error> {
        let mut wtxn = self.env.write_txn()?;
        self.db.put(&mut wtxn, USERS_KEY, serialized)?;
        wtxn.commit()
    }
}

fn is_capacity_error(err: &heed::Error) -> bool {
    matches!(err, heed::Error::Mdb(heed::MdbError::MapFull))
}
