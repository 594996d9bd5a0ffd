use time::Duration;

pub struct TTL {
    pub authorization_code: Duration,
}

impl Default for TTL {
    fn default() -> Self {
        Self {
            authorization_code: Duration::minutes(10),
        }
    }
}
