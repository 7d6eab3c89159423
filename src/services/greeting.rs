/// Formatting step the greeting route delegates its response body through.
pub struct GreetingService;

impl GreetingService {
    /// Return the assembled greeting line unchanged.
    #[must_use]
    pub fn say_hello(message: String) -> String {
        message
    }
}
