use super::*;

use entity::prelude::Category;
use sea_orm::EntityTrait;

/// Tests updating a category's name and color.
///
/// Expected: Ok(Some) with new values persisted
#[tokio::test]
async fn updates_own_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let created = factory::category::create_category(db, member.id).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: created.id,
            member_id: member.id,
            name: "Renamed".to_string(),
            color: "#123456".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.color, "#123456");

    // Verify the write was persisted
    let db_category = Category::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(db_category.category_name, "Renamed");
    assert_eq!(db_category.category_color, "#123456");

    Ok(())
}

/// Tests that updating another member's category changes nothing.
///
/// Expected: Ok(None) and the original values untouched
#[tokio::test]
async fn does_not_update_other_members_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::member::create_member(db).await?;
    let intruder = factory::member::create_member(db).await?;
    let category = factory::category::create_category(db, owner.id).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            member_id: intruder.id,
            name: "Hijacked".to_string(),
            color: "#000000".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    let db_category = Category::find_by_id(category.id).one(db).await?.unwrap();
    assert_eq!(db_category.category_name, category.category_name);

    Ok(())
}
