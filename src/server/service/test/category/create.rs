use super::*;

fn params(user_id: i32, name: &str) -> CreateStudyCategoryParams {
    CreateStudyCategoryParams::from_dto(
        user_id,
        CreateStudyCategoryDto {
            category_name: name.to_string(),
        },
    )
}

/// Tests creating a category with surrounding whitespace.
///
/// Expected: Ok with the trimmed name
#[tokio::test]
async fn creates_trimmed_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let category = StudyCategoryService::new(db)
        .create(params(user.id, "  Physics "))
        .await?;

    assert_eq!(category.name, "Physics");
    assert_eq!(category.user_id, user.id);

    Ok(())
}

/// Tests creating a category with a blank name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = StudyCategoryService::new(db)
        .create(params(user.id, "   "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
