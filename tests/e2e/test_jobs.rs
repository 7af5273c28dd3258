use crate::e2e::helpers;

use helpers::{fixtures, stub_backend::StubPlan, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_post_job_and_refresh_quota(ctx: &TestContext) {
    ctx.backend.set_plan(Some(StubPlan::active(5, 2)));
    ctx.login_employer().await;

    let response = ctx
        .client
        .post("/api/jobs", &fixtures::job_posting())
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.field("/id"), "job-1");
    assert_eq!(response.field("/title"), "Senior ServiceNow Developer");

    {
        let state = ctx.backend.state();
        assert_eq!(state.job_postings.len(), 1);
        assert_eq!(state.job_postings[0]["employmentType"], "full-time");
        assert_eq!(state.job_postings[0]["description"], "<p>Own our ITSM platform.</p>");
    }

    let session = ctx.client.get("/api/session").await.unwrap();
    assert_eq!(session.field("/entitlements/jobPostsRemaining"), 1);
    assert_eq!(session.field("/entitlements/canPostJob"), true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_posting_at_the_limit(ctx: &TestContext) {
    ctx.backend.set_plan(Some(StubPlan {
        job_used: 2,
        ..StubPlan::active(5, 2)
    }));
    ctx.login_employer().await;

    let response = ctx
        .client
        .post("/api/jobs", &fixtures::job_posting())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYMENT_REQUIRED)
        .assert_error_message("Job posting limit reached");
    assert!(ctx.backend.state().job_postings.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_posting_for_job_seekers(ctx: &TestContext) {
    ctx.login_job_seeker().await;

    let response = ctx
        .client
        .post("/api/jobs", &fixtures::job_posting())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Only employers can post jobs");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_before_spending_quota(ctx: &TestContext) {
    ctx.backend.set_plan(Some(StubPlan::active(5, 2)));
    ctx.login_employer().await;

    let mut posting = fixtures::job_posting();
    posting["salaryMin"] = 200000.into();

    let response = ctx.client.post("/api/jobs", &posting).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("exceeds maximum");
    assert!(ctx.backend.state().job_postings.is_empty());
    assert_eq!(ctx.backend.state().plan.as_ref().unwrap().job_used, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_backend_conflict_through(ctx: &TestContext) {
    ctx.backend.set_plan(Some(StubPlan::active(5, 2)));
    ctx.login_employer().await;
    ctx.backend.state().reject_duplicate_posting = true;

    let response = ctx
        .client
        .post("/api/jobs", &fixtures::job_posting())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error_message("Job posting already exists");
    assert_eq!(ctx.backend.state().plan.as_ref().unwrap().job_used, 0);
}
