//! # Users, sessions, and per-user data
//!
//! The users table is a single JSON map of username → [`User`]. Logging in
//! copies one row into the session key; that copy is a snapshot and is never
//! updated behind the caller's back. Anything linked to the user afterwards
//! (e.g. an `artist_id` from [`Repository::create_artist`]) shows up in the
//! per-user blob and the users table, and in [`Repository::current_user`]
//! only after [`Repository::refresh_session`].
//!
//! Rows are decoded one at a time. A row that does not decode is invisible to
//! `login` and `get_user` but still reserves its username and is written back
//! unchanged.
//!
//! The per-user blob lives under `user_data_prefix + username` and is read
//! and merge-written on behalf of whoever the session says is logged in.

use crate::error::{VibeError, VibeResult};
use crate::models::{User, UserData, UserDataPatch};
use crate::repo::{current_timestamp_millis, decode_entry, encode_entry, KeyValueStore, Repository};

impl<S: KeyValueStore> Repository<S> {
    fn save_user(&self, user: &User) {
        let key = &self.config().storage.users_key;
        let mut rows = self.read_json_map(key);
        if let Some(row) = encode_entry(key, user) {
            rows.insert(user.username.clone(), row);
            self.write_json(key, &rows);
        }
    }

    fn set_session(&self, user: &User) {
        self.write_json(&self.config().storage.current_user_key, user);
    }

    /// Look up a users-table row.
    pub fn get_user(&self, username: &str) -> Option<User> {
        let key = &self.config().storage.users_key;
        let row = self.read_json_map(key).remove(username)?;
        decode_entry(key, row)
    }

    /// Register a new user and give them default settings.
    ///
    /// Does not log the user in unless the session config asks for it.
    pub fn signup(&self, username: &str, password: &str, email: &str) -> VibeResult<()> {
        if username.is_empty() {
            return Err(VibeError::ValidationFailed("username".to_string()));
        }
        if password.is_empty() {
            return Err(VibeError::ValidationFailed("password".to_string()));
        }

        if self
            .read_json_map(&self.config().storage.users_key)
            .contains_key(username)
        {
            return Err(VibeError::DuplicateUsername(username.to_string()));
        }

        self.save_user(&User::new(username, password, email));
        self.write_json(&self.user_data_key(username), &UserData::default());
        tracing::info!(username, "user signed up");

        if self.config().session.auto_login_on_signup {
            self.login(username, password)?;
        }
        Ok(())
    }

    /// Check credentials and replace the session with a snapshot of the user.
    pub fn login(&self, username: &str, password: &str) -> VibeResult<User> {
        let user = self
            .get_user(username)
            .filter(|user| user.password == password)
            .ok_or(VibeError::InvalidCredentials)?;
        self.set_session(&user);
        tracing::info!(username, "user logged in");
        Ok(user)
    }

    /// Start a mock Google session. The synthetic user is not added to the
    /// users table.
    pub fn login_with_google(&self) -> User {
        let user = User {
            username: format!("google_user_{}", current_timestamp_millis()),
            password: String::new(),
            email: "user@gmail.com".to_string(),
            artist_id: None,
            joined: chrono::Utc::now(),
            is_google: true,
        };
        self.set_session(&user);
        tracing::info!(username = %user.username, "mock google login");
        user
    }

    /// Mock password reset. Nothing is sent and nothing changes.
    pub fn reset_password(&self, email: &str) -> String {
        tracing::debug!(email, "password reset requested");
        format!("Password reset link sent to {email}")
    }

    pub fn logout(&self) {
        self.remove_key(&self.config().storage.current_user_key);
        tracing::info!("user logged out");
    }

    /// The session snapshot, as of login.
    pub fn current_user(&self) -> Option<User> {
        self.read_json(&self.config().storage.current_user_key)
    }

    /// Re-read the session user from the users table and store the fresh copy.
    ///
    /// Sessions without a users-table row (mock Google logins, deleted keys)
    /// are returned unchanged.
    pub fn refresh_session(&self) -> Option<User> {
        let current = self.current_user()?;
        match self.get_user(&current.username) {
            Some(fresh) => {
                self.set_session(&fresh);
                Some(fresh)
            }
            None => Some(current),
        }
    }

    /// The logged-in user's private blob, or defaults if none is stored yet.
    pub fn get_user_data(&self) -> VibeResult<UserData> {
        let user = self.current_user().ok_or(VibeError::NotLoggedIn)?;
        Ok(self
            .read_json(&self.user_data_key(&user.username))
            .unwrap_or_default())
    }

    /// Shallow-merge `patch` into the logged-in user's blob and persist it.
    pub fn update_user_data(&self, patch: UserDataPatch) -> VibeResult<UserData> {
        let user = self.current_user().ok_or(VibeError::NotLoggedIn)?;
        let key = self.user_data_key(&user.username);
        let mut data: UserData = self.read_json(&key).unwrap_or_default();
        data.merge(patch);
        self.write_json(&key, &data);
        Ok(data)
    }

    /// Point the users-table row at an artist; the session is left alone.
    pub(crate) fn link_artist(&self, username: &str, artist_id: &str) {
        if let Some(mut user) = self.get_user(username) {
            user.artist_id = Some(artist_id.to_string());
            self.save_user(&user);
        }
    }
}
