use super::*;

#[test]
fn category_is_taken_as_given_regardless_of_wording() {
    let err = UiError::new(
        UiErrorCategory::Validation,
        UiErrorContext::Input,
        "unknown command 'queue worker'; type 'help' for the command list",
    );
    assert_eq!(err.category(), UiErrorCategory::Validation);

    let err = UiError::new(
        UiErrorCategory::Transport,
        UiErrorContext::Selection,
        "invalid state: selection worker disconnected",
    );
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::Selection);
}

#[test]
fn panicked_thread_is_an_internal_error() {
    let err = UiError::thread_panicked("presenter");

    assert_eq!(err.category(), UiErrorCategory::Unknown);
    assert_eq!(err.context(), UiErrorContext::Selection);
    assert_eq!(err.message(), "presenter thread panicked");
}

#[test]
fn api_codes_map_to_categories() {
    let invalid = ApiError::new(ErrorCode::InvalidSelection, "unknown launch site");
    assert_eq!(
        UiError::from_api(UiErrorContext::Selection, &invalid).category(),
        UiErrorCategory::Validation
    );

    let internal = ApiError::new(ErrorCode::Internal, "worker gone");
    assert_eq!(
        UiError::from_api(UiErrorContext::Startup, &internal).category(),
        UiErrorCategory::Unknown
    );
}
