//! Session persistence across "processes" through the file tier.

use attest_auth::{FileStore, Session, SessionSource, TOKEN_ENV_VAR};
use attest_core::entities::User;
use attest_core::enums::Role;
use figment::Jail;
use pretty_assertions::assert_eq;

fn user() -> User {
    User {
        id: 1,
        email: "admin@example.com".into(),
        full_name: "Platform Admin".into(),
        role: Role::PlatformAdmin,
        organization_id: None,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn session_survives_a_restart() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    let first = Session::new(Box::new(FileStore::new(path.clone())));
    first.establish("opaque-token", user()).expect("persist");

    let second = Session::new(Box::new(FileStore::new(path)));
    let source = second.restore_with_override(None).expect("restore");
    assert_eq!(source, Some(SessionSource::Store("file")));
    assert_eq!(second.token().as_deref(), Some("opaque-token"));
    assert_eq!(second.user().map(|u| u.role), Some(Role::PlatformAdmin));
}

#[test]
fn logout_removes_the_file() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    let session = Session::new(Box::new(FileStore::new(path.clone())));
    session.establish("opaque-token", user()).expect("persist");
    assert!(path.exists());

    session.clear().expect("clear");
    assert!(!path.exists());
}

#[test]
fn env_token_is_picked_up_by_restore() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV_VAR, "env-token");
        let path = jail.directory().join("session.json");
        let session = Session::new(Box::new(FileStore::new(path)));

        let source = session.restore().expect("restore");
        assert_eq!(source, Some(SessionSource::Env));
        assert_eq!(session.token().as_deref(), Some("env-token"));
        assert!(session.user().is_none());
        Ok(())
    });
}

#[test]
fn blank_env_token_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV_VAR, "  ");
        let path = jail.directory().join("session.json");
        let session = Session::new(Box::new(FileStore::new(path)));

        assert_eq!(session.restore().expect("restore"), None);
        Ok(())
    });
}
