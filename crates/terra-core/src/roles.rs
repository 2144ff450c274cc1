//! Role names and role comparison.
//!
//! Role names come from the database and are compared case-insensitively:
//! `"ADMINISTRADOR"`, `"Administrador"` and `"administrador"` are the same
//! role.

pub const ADMINISTRADOR: &str = "Administrador";
pub const SUPERVISOR: &str = "Supervisor";
pub const EQUIPO: &str = "Equipo";

/// Role names that bypass permission checks.
const ADMIN_ALIASES: [&str; 2] = ["admin", "administrador"];

fn normalize(role: &str) -> String {
    role.trim().to_lowercase()
}

/// Case-insensitive role equality.
pub fn role_matches(role: &str, candidate: &str) -> bool {
    normalize(role) == normalize(candidate)
}

/// `true` for any administrator alias.
pub fn is_admin(role: &str) -> bool {
    let role = normalize(role);
    ADMIN_ALIASES.iter().any(|alias| *alias == role)
}

/// Administrators and supervisors see every record; other roles only their own.
pub fn sees_all_records(role: &str) -> bool {
    is_admin(role) || role_matches(role, SUPERVISOR)
}
