mod floats;
mod salts;
mod stream;

pub use floats::floats;
pub use floats::project;
pub use floats::FloatStream;
pub use salts::crash_point;
pub use salts::fallback_point;
pub use salts::trunc2;
pub use stream::bytes_at;
pub use stream::hash_server_seed;
pub use stream::ByteStream;

/// the seed pair every byte of the stream is keyed on. the server seed is
/// raw ASCII keying material; hex-decoding it anywhere is a defect.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Seeds {
    pub server: String,
    pub client: String,
}

impl Seeds {
    pub fn new(server: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            client: client.into(),
        }
    }
}

impl crate::Arbitrary for Seeds {
    fn random() -> Self {
        use rand::distributions::Alphanumeric;
        use rand::Rng;
        let mut draw = |n: usize| {
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(n)
                .map(char::from)
                .collect::<String>()
        };
        Self {
            server: draw(64),
            client: draw(16),
        }
    }
}
