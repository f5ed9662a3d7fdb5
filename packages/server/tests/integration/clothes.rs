use serde_json::json;

use crate::common::{TestApp, routes};

const ALICE: i32 = 7;
const BOB: i32 = 8;

/// A category and two tags owned by `user_id`.
async fn seed_wardrobe(app: &TestApp, user_id: i32) -> (i32, i32, i32) {
    let category = app.create_category(user_id, "Shirts").await;
    let summer = app.create_tag(user_id, "summer").await;
    let casual = app.create_tag(user_id, "casual").await;
    (category, summer, casual)
}

mod clothing_item_creation {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_same_tags_and_owner() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;

        let created = app
            .post_as(
                routes::CLOTHES,
                &json!({
                    "category_id": category,
                    "image_url": "http://x/1.png",
                    "tag_ids": [summer, casual],
                }),
                ALICE,
            )
            .await;
        assert_eq!(created.status, 201, "{}", created.text);
        assert_eq!(created.body["user_id"], ALICE);
        assert_eq!(created.body["category_id"], category);
        assert_eq!(created.body["image_url"], "http://x/1.png");
        assert_eq!(created.tag_ids(), vec![summer, casual]);

        let fetched = app
            .get_as(&routes::clothing_item(created.id()), ALICE)
            .await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["user_id"], ALICE);
        assert_eq!(fetched.tag_ids(), vec![summer, casual]);
        assert_eq!(fetched.body["tags"][0]["name"], "summer");
    }

    #[tokio::test]
    async fn tag_ids_default_to_empty() {
        let app = TestApp::spawn().await;
        let category = app.create_category(ALICE, "Shoes").await;

        let res = app
            .post_as(
                routes::CLOTHES,
                &json!({ "category_id": category, "image_url": "http://x/shoe.png" }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["tags"], json!([]));
    }

    #[tokio::test]
    async fn duplicate_tag_ids_are_bound_once() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;

        let id = app.create_item(ALICE, category, &[summer, summer]).await;

        assert_eq!(app.bound_tag_ids(id).await, vec![summer]);
    }

    #[tokio::test]
    async fn missing_image_url_is_rejected_without_side_effects() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;

        let res = app
            .post_as(
                routes::CLOTHES,
                &json!({ "category_id": category, "image_url": "  ", "tag_ids": [summer] }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(app.item_count().await, 0);
        assert_eq!(app.association_count().await, 0);
    }

    #[tokio::test]
    async fn zero_category_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_as(
                routes::CLOTHES,
                &json!({ "category_id": 0, "image_url": "http://x/1.png" }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(app.item_count().await, 0);
    }

    #[tokio::test]
    async fn foreign_tag_is_rejected_and_nothing_is_stored() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let bobs_tag = app.create_tag(BOB, "formal").await;

        let res = app
            .post_as(
                routes::CLOTHES,
                &json!({
                    "category_id": category,
                    "image_url": "http://x/1.png",
                    "tag_ids": [summer, bobs_tag],
                }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(app.item_count().await, 0);
        assert_eq!(app.association_count().await, 0);
    }

    #[tokio::test]
    async fn foreign_category_is_rejected() {
        let app = TestApp::spawn().await;
        let bobs_category = app.create_category(BOB, "Hats").await;

        let res = app
            .post_as(
                routes::CLOTHES,
                &json!({ "category_id": bobs_category, "image_url": "http://x/1.png" }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(app.item_count().await, 0);
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_as(routes::CLOTHES, &json!({ "category_id": "three" }), ALICE)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod clothing_item_reads {
    use super::*;

    #[tokio::test]
    async fn shirts_scenario() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;

        let first = app.create_item(ALICE, category, &[summer]).await;
        let second = app.create_item(ALICE, category, &[summer, casual]).await;
        let third = app.create_item(ALICE, category, &[]).await;

        let res = app.get_as(routes::CLOTHES, ALICE).await;
        assert_eq!(res.status, 200);

        let items = res.body.as_array().expect("array body");
        let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![first as i64, second as i64, third as i64]);
        assert_eq!(items[0]["tags"].as_array().unwrap().len(), 1);
        assert_eq!(items[1]["tags"].as_array().unwrap().len(), 2);
        assert_eq!(items[2]["tags"], json!([]));
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_caller() {
        let app = TestApp::spawn().await;
        let (category, _, _) = seed_wardrobe(&app, ALICE).await;
        app.create_item(ALICE, category, &[]).await;

        let res = app.get_as(routes::CLOTHES, BOB).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn other_users_item_is_not_found() {
        let app = TestApp::spawn().await;
        let (category, _, _) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[]).await;

        let res = app.get_as(&routes::clothing_item(id), BOB).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.get_as("/clothes/abc", ALICE).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod clothing_item_update {
    use super::*;

    #[tokio::test]
    async fn update_replaces_the_whole_tag_set() {
        let app = TestApp::spawn().await;
        let category = app.create_category(ALICE, "Shirts").await;
        let t1 = app.create_tag(ALICE, "one").await;
        let t2 = app.create_tag(ALICE, "two").await;
        let t3 = app.create_tag(ALICE, "three").await;
        let id = app.create_item(ALICE, category, &[t1, t2]).await;

        let res = app
            .patch_as(
                &routes::clothing_item(id),
                &json!({ "category_id": category, "image_url": "http://x/2.png", "tag_ids": [t3] }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["image_url"], "http://x/2.png");
        assert_eq!(res.tag_ids(), vec![t3]);
        assert_eq!(app.bound_tag_ids(id).await, vec![t3]);
    }

    #[tokio::test]
    async fn update_with_empty_tags_clears_them() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer, casual]).await;

        let res = app
            .patch_as(
                &routes::clothing_item(id),
                &json!({ "category_id": category, "image_url": "http://x/1.png", "tag_ids": [] }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 200);
        assert!(app.bound_tag_ids(id).await.is_empty());
    }

    #[tokio::test]
    async fn failed_update_keeps_previous_tags() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let bobs_tag = app.create_tag(BOB, "formal").await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let res = app
            .patch_as(
                &routes::clothing_item(id),
                &json!({
                    "category_id": category,
                    "image_url": "http://x/changed.png",
                    "tag_ids": [bobs_tag],
                }),
                ALICE,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(app.bound_tag_ids(id).await, vec![summer]);
        let fetched = app.get_as(&routes::clothing_item(id), ALICE).await;
        assert_eq!(fetched.body["image_url"], "https://img.example.com/shirt.png");
    }

    #[tokio::test]
    async fn update_of_foreign_item_is_not_found() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let bobs_category = app.create_category(BOB, "Shirts").await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let res = app
            .patch_as(
                &routes::clothing_item(id),
                &json!({ "category_id": bobs_category, "image_url": "http://x/1.png" }),
                BOB,
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(app.bound_tag_ids(id).await, vec![summer]);
    }
}

mod clothing_item_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_item_and_associations() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer, casual]).await;

        let res = app.delete_as(&routes::clothing_item(id), ALICE).await;
        assert_eq!(res.status, 204);
        assert!(app.bound_tag_ids(id).await.is_empty());

        let again = app.delete_as(&routes::clothing_item(id), ALICE).await;
        assert_eq!(again.status, 404);

        let get = app.get_as(&routes::clothing_item(id), ALICE).await;
        assert_eq!(get.status, 404);
    }

    #[tokio::test]
    async fn foreign_delete_leaves_item_untouched() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let res = app.delete_as(&routes::clothing_item(id), BOB).await;

        assert_eq!(res.status, 404);
        assert_eq!(app.item_count().await, 1);
        assert_eq!(app.bound_tag_ids(id).await, vec![summer]);
    }
}

mod clothing_item_tag_binding {
    use super::*;

    #[tokio::test]
    async fn add_and_remove_single_tag() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let added = app
            .post_as(&routes::clothing_item_tag(id, casual), &json!({}), ALICE)
            .await;
        assert_eq!(added.status, 200, "{}", added.text);
        assert_eq!(added.tag_ids(), vec![summer, casual]);

        let removed = app
            .delete_as(&routes::clothing_item_tag(id, summer), ALICE)
            .await;
        assert_eq!(removed.status, 200);
        assert_eq!(removed.tag_ids(), vec![casual]);
    }

    #[tokio::test]
    async fn adding_an_attached_tag_is_a_no_op() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let res = app
            .post_as(&routes::clothing_item_tag(id, summer), &json!({}), ALICE)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(app.bound_tag_ids(id).await, vec![summer]);
    }

    #[tokio::test]
    async fn removing_an_unattached_tag_is_a_no_op() {
        let app = TestApp::spawn().await;
        let (category, summer, casual) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[summer]).await;

        let res = app
            .delete_as(&routes::clothing_item_tag(id, casual), ALICE)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.tag_ids(), vec![summer]);
    }

    #[tokio::test]
    async fn foreign_tag_cannot_be_attached() {
        let app = TestApp::spawn().await;
        let (category, _, _) = seed_wardrobe(&app, ALICE).await;
        let bobs_tag = app.create_tag(BOB, "formal").await;
        let id = app.create_item(ALICE, category, &[]).await;

        let res = app
            .post_as(&routes::clothing_item_tag(id, bobs_tag), &json!({}), ALICE)
            .await;

        assert_eq!(res.status, 404);
        assert!(app.bound_tag_ids(id).await.is_empty());
    }

    #[tokio::test]
    async fn foreign_item_cannot_be_tagged() {
        let app = TestApp::spawn().await;
        let (category, summer, _) = seed_wardrobe(&app, ALICE).await;
        let id = app.create_item(ALICE, category, &[]).await;
        let bobs_tag = app.create_tag(BOB, "formal").await;

        let res = app
            .post_as(&routes::clothing_item_tag(id, bobs_tag), &json!({}), BOB)
            .await;
        assert_eq!(res.status, 404);

        let res = app
            .delete_as(&routes::clothing_item_tag(id, summer), BOB)
            .await;
        assert_eq!(res.status, 404);
    }
}

mod identity_header {
    use super::*;

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let app = TestApp::spawn().await;

        let res = app.get_with_raw_user(routes::CLOTHES, None).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn non_integer_header_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.get_with_raw_user(routes::CLOTHES, Some("alice")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
