/// Successful response body
macro_rules! result {
    ($id:expr, $($result:tt)+) => {
        serde_json::json!({ "result": $($result)+, "id": $id })
    };
}

/// Error response body, `[code, message]`
macro_rules! error {
    ($id:expr, $code:expr, $msg:expr) => {
        serde_json::json!({ "error": [$code, $msg], "id": $id })
    };
}
