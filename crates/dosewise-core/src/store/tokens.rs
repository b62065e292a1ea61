//! Session token operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, StoreResult};
use crate::models::Role;

impl Database {
    /// Store a token for a role, overwriting any existing token for it.
    /// The token format is not validated.
    pub fn store_token(&self, role: Role, token: &str) -> StoreResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO session_tokens (role, token, stored_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(role) DO UPDATE SET
                token = excluded.token,
                stored_at = excluded.stored_at
            "#,
            params![role.as_str(), token, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// First present token across both roles, checking patient then clinic.
    /// Callers must not infer the role from this call alone; use
    /// [`Database::token_for_role`] when the role matters.
    pub fn stored_token(&self) -> StoreResult<Option<String>> {
        for role in Role::ALL {
            if let Some(token) = self.token_for_role(role)? {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    /// Token for a specific role.
    pub fn token_for_role(&self, role: Role) -> StoreResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT token FROM session_tokens WHERE role = ?",
                [role.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Remove both role tokens unconditionally.
    pub fn clear_tokens(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM session_tokens", [])?;
        Ok(())
    }
}
