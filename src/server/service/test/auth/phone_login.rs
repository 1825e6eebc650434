use super::*;

/// Tests logging in with a new identity.
///
/// Expected: created on the first login, found on the second
#[tokio::test]
async fn creates_then_finds_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_levels(db).await?;
    let codes = VerificationCodeService::new(None);
    let service = AuthService::new(db, &codes, &StubVerifier);

    let first = service.phone_login("valid:uid-1:01022223333").await?;
    assert!(first.created);
    assert_eq!(first.user.phone_number, "01022223333");
    assert_eq!(first.user.firebase_uid.as_deref(), Some("uid-1"));

    let second = service.phone_login("valid:uid-1").await?;
    assert!(!second.created);
    assert_eq!(second.user.id, first.user.id);

    Ok(())
}

/// Tests linking an identity to an account created by code verification.
///
/// Expected: existing user returned with the subject attached, no new user
#[tokio::test]
async fn links_existing_phone_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let existing = UserFactory::new(db, level.id)
        .phone_number("01044445555")
        .build()
        .await?;
    let codes = VerificationCodeService::new(None);
    let service = AuthService::new(db, &codes, &StubVerifier);

    let login = service.phone_login("valid:uid-2:01044445555").await?;

    assert!(!login.created);
    assert_eq!(login.user.id, existing.id);
    assert_eq!(login.user.firebase_uid.as_deref(), Some("uid-2"));

    Ok(())
}

/// Tests a new identity whose token has no phone number.
///
/// Expected: Err(MissingPhoneClaim)
#[tokio::test]
async fn rejects_new_user_without_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_levels(db).await?;
    let codes = VerificationCodeService::new(None);
    let service = AuthService::new(db, &codes, &StubVerifier);

    let result = service.phone_login("valid:uid-3").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingPhoneClaim(_)))
    ));

    Ok(())
}

/// Tests a token the verifier rejects.
///
/// Expected: Err(InvalidIdToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = VerificationCodeService::new(None);
    let service = AuthService::new(db, &codes, &StubVerifier);

    let result = service.phone_login("forged").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidIdToken(_)))
    ));

    Ok(())
}

/// Tests a code verification and an identity login for the same phone number racing.
///
/// Whichever creates the account, the identity login ends up linked to it.
///
/// Expected: one user for the phone number, carrying the token subject
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn links_account_created_concurrently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kickoff_tables()
        .with_database_file()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_levels(db).await?;
    let codes = VerificationCodeService::new(Some("123456".to_string()));
    let service = AuthService::new(db, &codes, &StubVerifier);
    service.send_code("01066667777").await?;

    let (verified, login) = tokio::join!(
        service.verify_code("01066667777", "123456"),
        service.phone_login("valid:uid-race:01066667777"),
    );
    let verified = verified?;
    let login = login?;

    assert_eq!(verified.id, login.user.id);
    assert_eq!(login.user.firebase_uid.as_deref(), Some("uid-race"));

    let stored = UserRepository::new(db)
        .find_by_phone_number("01066667777")
        .await?
        .unwrap();
    assert_eq!(stored.firebase_uid.as_deref(), Some("uid-race"));

    Ok(())
}
