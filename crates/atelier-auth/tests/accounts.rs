//! Accounts and sessions persisted across store reopenings.

use atelier_auth::{AuthService, LoginForm, SignupForm, User};
use atelier_cache::Cache;

fn signup_form() -> SignupForm {
    SignupForm {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        password: "cobol59".into(),
        confirm_password: "cobol59".into(),
    }
}

#[test]
fn session_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let user = {
        let cache = Cache::open(dir.path()).unwrap();
        AuthService::new(&cache).signup(&signup_form()).unwrap()
    };

    let cache = Cache::open(dir.path()).unwrap();
    assert_eq!(AuthService::new(&cache).current_user().unwrap(), user);
}

#[test]
fn signup_then_login_with_the_same_credentials() {
    let dir = tempfile::tempdir().unwrap();

    {
        let cache = Cache::open(dir.path()).unwrap();
        let auth = AuthService::new(&cache);
        auth.signup(&signup_form()).unwrap();
        auth.logout().unwrap();
    }

    let cache = Cache::open(dir.path()).unwrap();
    let auth = AuthService::new(&cache);
    assert_eq!(auth.current_user().unwrap(), User::Anonymous);

    let user = auth
        .login(&LoginForm::new("grace@example.com", "cobol59"))
        .unwrap();
    assert_eq!(user.display_name(), "Grace Hopper");
    assert!(auth.signup(&signup_form()).is_err());
}
