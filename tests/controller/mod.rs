//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to check the status code each outcome
//! maps to.

mod booking;
mod review;
mod sub_record;
mod tour;
mod user;

use tourbook::server::model::app::AppState;
use tourbook_test_utils::prelude::*;

fn state(test: &TestContext) -> AppState {
    test.to_app_state()
}
