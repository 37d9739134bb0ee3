/// Runs `$body`, logs how long it took under `$comment`, and yields its value.
#[macro_export]
macro_rules! time_it {
    ($comment:expr => $body:expr) => {{
        let start = std::time::Instant::now();
        let result = $body;
        let duration = start.elapsed();
        ::tracing::info!(elapsed = ?duration, "{}", $comment);
        result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_time_it_yields_body_value() {
        let value = crate::time_it!("adding" => 40 + 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_time_it_passes_errors_through() {
        let result: Result<(), &str> = crate::time_it!("failing" => Err("nope"));
        assert_eq!(result, Err("nope"));
    }
}
