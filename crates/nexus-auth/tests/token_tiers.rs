//! File-tier behavior of the token store as the CLI wires it, without
//! touching a real keychain.

use nexus_auth::{FileTokenStore, TokenSource, TokenStore, callback};
use pretty_assertions::assert_eq;

#[test]
fn callback_token_survives_a_new_store_instance() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join(".nexus").join("credentials");

    let token = callback::exchange(
        "http://localhost:5173/auth/callback?token=eyJ.payload.sig",
        None,
    )
    .expect("token");
    FileTokenStore::new(path.clone()).store(&token).expect("store");

    let reopened = FileTokenStore::new(path);
    assert_eq!(reopened.load().as_deref(), Some("eyJ.payload.sig"));
    assert_eq!(reopened.source(), Some(TokenSource::File));
}

#[test]
fn shared_store_behind_trait_object() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store: Box<dyn TokenStore> = Box::new(FileTokenStore::new(tmp.path().join("credentials")));

    store.store("one").expect("store");
    store.store("two").expect("overwrite");
    assert_eq!(store.load().as_deref(), Some("two"));

    store.delete().expect("delete");
    assert_eq!(store.load(), None);
    assert_eq!(store.source(), None);
}
