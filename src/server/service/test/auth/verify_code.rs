use super::*;

/// Tests the first verification of a phone number.
///
/// Verifies that a user is created at the lowest tier with a generated name.
///
/// Expected: Ok(User) at the lowest level, the same user on the next verification
#[tokio::test]
async fn creates_user_on_first_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::seed_levels(db).await?;
    let codes = VerificationCodeService::new(Some("123456".to_string()));
    let service = AuthService::new(db, &codes, &StubVerifier);

    service.send_code("01012345678").await?;
    let user = service.verify_code("01012345678", "123456").await?;

    assert_eq!(user.phone_number, "01012345678");
    assert_eq!(user.level_id, levels[0].id);
    assert_eq!(user.name, "player-5678");

    service.send_code("01012345678").await?;
    let again = service.verify_code("01012345678", "123456").await?;
    assert_eq!(again.id, user.id);

    Ok(())
}

/// Tests a wrong or reused code.
///
/// Expected: Err(InvalidVerificationCode)
#[tokio::test]
async fn rejects_wrong_and_reused_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_levels(db).await?;
    let codes = VerificationCodeService::new(Some("123456".to_string()));
    let service = AuthService::new(db, &codes, &StubVerifier);

    service.send_code("01012345678").await?;
    assert!(matches!(
        service.verify_code("01012345678", "654321").await,
        Err(AppError::AuthErr(AuthError::InvalidVerificationCode))
    ));

    service.verify_code("01012345678", "123456").await?;
    assert!(matches!(
        service.verify_code("01012345678", "123456").await,
        Err(AppError::AuthErr(AuthError::InvalidVerificationCode))
    ));

    Ok(())
}

/// Tests sending a code to an empty phone number.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_phone_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = VerificationCodeService::new(None);
    let service = AuthService::new(db, &codes, &StubVerifier);

    assert!(matches!(
        service.send_code("  ").await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
