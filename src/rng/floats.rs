use super::ByteStream;
use super::Seeds;
use crate::Cursor;
use crate::Nonce;

/// lazy projection of the byte stream into uniform floats in [0, 1).
/// each float eats 4 bytes, so a 32-byte block yields 8 floats; the
/// sequence is infinite, deterministic, and restartable from any cursor.
pub struct FloatStream {
    stream: ByteStream,
    nonce: Nonce,
    cursor: Cursor,
    block: [u8; 32],
    offset: usize,
}

impl FloatStream {
    pub fn new(stream: ByteStream, nonce: Nonce) -> Self {
        Self::seek(stream, nonce, 0)
    }

    /// start emitting floats from byte 0 of `cursor`
    pub fn seek(stream: ByteStream, nonce: Nonce, cursor: Cursor) -> Self {
        Self {
            stream,
            nonce,
            cursor,
            block: [0u8; 32],
            offset: 32,
        }
    }

    /// reposition without rebuilding the keyed state. the scanner calls
    /// this once per nonce and refills one preallocated slice.
    pub fn rewind(&mut self, nonce: Nonce, cursor: Cursor) {
        self.nonce = nonce;
        self.cursor = cursor;
        self.offset = 32;
    }

    /// fill `out` with the next `out.len()` floats
    pub fn fill(&mut self, out: &mut [f64]) {
        for f in out.iter_mut() {
            *f = self.step();
        }
    }

    fn step(&mut self) -> f64 {
        if self.offset == 32 {
            self.stream
                .block_into(self.nonce, self.cursor, &mut self.block);
            self.cursor += 1;
            self.offset = 0;
        }
        let quad = [
            self.block[self.offset],
            self.block[self.offset + 1],
            self.block[self.offset + 2],
            self.block[self.offset + 3],
        ];
        self.offset += 4;
        project(quad)
    }
}

impl Iterator for FloatStream {
    type Item = f64;
    fn next(&mut self) -> Option<f64> {
        Some(self.step())
    }
}

/// four stream bytes map to b0/256 + b1/256^2 + b2/256^3 + b3/256^4,
/// a uniform value in [0, 1) with 32 bits of entropy. every downstream
/// result depends on this exact projection.
pub fn project(b: [u8; 4]) -> f64 {
    b[0] as f64 / 256.0
        + b[1] as f64 / 65_536.0
        + b[2] as f64 / 16_777_216.0
        + b[3] as f64 / 4_294_967_296.0
}

/// materialize `count` floats starting at `cursor`
pub fn floats(seeds: &Seeds, nonce: Nonce, cursor: Cursor, count: usize) -> Vec<f64> {
    FloatStream::seek(ByteStream::from(seeds), nonce, cursor)
        .take(count)
        .collect()
}
