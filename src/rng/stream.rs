use super::Seeds;
use crate::Cursor;
use crate::Nonce;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;
use std::io::Write;

type HmacSha256 = Hmac<Sha256>;

/// the keyed byte stream. one 32-byte block per cursor:
///
///   block = HMAC-SHA256(key = server seed, msg = "<client>:<nonce>:<cursor>")
///
/// the server seed is keyed verbatim and the key schedule is computed once
/// per seed pair, then cloned per block. the message is formatted into a
/// reused scratch buffer so striding cursors never allocates.
#[derive(Clone)]
pub struct ByteStream {
    base: HmacSha256,
    prefix: Vec<u8>,
    scratch: Vec<u8>,
}

impl From<&Seeds> for ByteStream {
    fn from(seeds: &Seeds) -> Self {
        let mut prefix = Vec::with_capacity(seeds.client.len() + 1);
        prefix.extend_from_slice(seeds.client.as_bytes());
        prefix.push(b':');
        Self {
            base: HmacSha256::new_from_slice(seeds.server.as_bytes())
                .expect("hmac accepts keys of any length"),
            scratch: Vec::with_capacity(prefix.len() + 24),
            prefix,
        }
    }
}

impl ByteStream {
    /// the 32 bytes at (nonce, cursor), written into `out`
    pub fn block_into(&mut self, nonce: Nonce, cursor: Cursor, out: &mut [u8; 32]) {
        self.scratch.clear();
        self.scratch.extend_from_slice(&self.prefix);
        write!(self.scratch, "{}:{}", nonce, cursor).expect("write to Vec is infallible");
        let mut mac = self.base.clone();
        mac.update(&self.scratch);
        out.copy_from_slice(&mac.finalize().into_bytes());
    }

    /// the 32 bytes at (nonce, cursor)
    pub fn block(&mut self, nonce: Nonce, cursor: Cursor) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.block_into(nonce, cursor, &mut out);
        out
    }
}

/// one-shot form of the stream contract
pub fn bytes_at(seeds: &Seeds, nonce: Nonce, cursor: Cursor) -> [u8; 32] {
    ByteStream::from(seeds).block(nonce, cursor)
}

/// plain SHA-256 of the raw server seed bytes, hex-encoded. this is the
/// commitment the operator publishes before the seed is revealed.
pub fn hash_server_seed(server: &str) -> String {
    use sha2::Digest;
    hex::encode(Sha256::digest(server.as_bytes()))
}
