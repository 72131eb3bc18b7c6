use crate::helpers::{mount_default_photo, no_redirect_client, spawn_app};

#[tokio::test]
async fn home_page_renders_before_any_fetch() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("failed to GET home page");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("failed to read body");
    assert!(body.contains("<!DOCTYPE"));
    assert!(body.contains("Roverpic"));
    assert!(body.contains("No photo yet."));
    assert!(body.contains("Nothing banned."));
}

#[tokio::test]
async fn fetch_form_redirects_home_and_shows_the_photo() {
    let app = spawn_app().await;
    mount_default_photo(&app).await;
    let client = no_redirect_client();

    let response = client
        .post(app.page_url("/fetch"))
        .send()
        .await
        .expect("failed to POST fetch form");

    assert_eq!(response.status(), 303);
    assert_eq!(
        response.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let body = reqwest::get(app.page_url("/"))
        .await
        .expect("failed to GET home page")
        .text()
        .await
        .expect("failed to read body");
    assert!(body.contains("https://mars.test/spirit.jpg"));
    assert!(body.contains("Spirit"));
}

#[tokio::test]
async fn ban_form_adds_a_rule_and_redirects() {
    let app = spawn_app().await;
    mount_default_photo(&app).await;
    let client = no_redirect_client();

    let response = client
        .post(app.page_url("/bans"))
        .form(&[("attribute", "camera"), ("value", "FHAZ")])
        .send()
        .await
        .expect("failed to POST ban form");

    assert_eq!(response.status(), 303);

    let body = reqwest::get(app.page_url("/"))
        .await
        .expect("failed to GET home page")
        .text()
        .await
        .expect("failed to read body");
    assert!(body.contains("camera: FHAZ"));
    assert!(body.contains("/bans/0/delete"));
}

#[tokio::test]
async fn unban_form_removes_the_rule() {
    let app = spawn_app().await;
    mount_default_photo(&app).await;
    let client = no_redirect_client();

    client
        .post(app.page_url("/bans"))
        .form(&[("attribute", "camera"), ("value", "FHAZ")])
        .send()
        .await
        .expect("failed to POST ban form");

    let response = client
        .post(app.page_url("/bans/0/delete"))
        .send()
        .await
        .expect("failed to POST unban form");

    assert_eq!(response.status(), 303);

    let body = reqwest::get(app.page_url("/"))
        .await
        .expect("failed to GET home page")
        .text()
        .await
        .expect("failed to read body");
    assert!(body.contains("Nothing banned."));
}

#[tokio::test]
async fn unban_form_with_no_bans_is_not_found() {
    let app = spawn_app().await;
    let client = no_redirect_client();

    let response = client
        .post(app.page_url("/bans/0/delete"))
        .send()
        .await
        .expect("failed to POST unban form");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn exhausted_candidates_message_is_shown() {
    let app = spawn_app().await;
    mount_default_photo(&app).await;
    let client = no_redirect_client();

    for rover in ["curiosity", "opportunity", "spirit"] {
        client
            .post(app.page_url("/bans"))
            .form(&[("attribute", "rover"), ("value", rover)])
            .send()
            .await
            .expect("failed to POST ban form");
    }

    let body = reqwest::get(app.page_url("/"))
        .await
        .expect("failed to GET home page")
        .text()
        .await
        .expect("failed to read body");
    assert!(body.contains("all candidates banned"));
}
