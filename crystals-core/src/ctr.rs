//! AES-256 in counter mode as an extendable-output reader.
//!
//! The `-AES` parameter sets replace SHAKE with an AES-256-CTR keystream.
//! The 16-byte counter block is `nonce (12 bytes) || counter (u32, big-endian)`
//! with the counter starting at zero. Exposing the keystream through
//! [`XofReader`] lets the samplers consume SHAKE and AES streams through the
//! same code path.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use sha3::digest::XofReader;
use zeroize::Zeroize;

const BLOCK_BYTES: usize = 16;

/// AES-256-CTR keystream generator.
pub struct Aes256Ctr {
    cipher: Aes256,
    nonce: [u8; 12],
    counter: u32,
    block: [u8; BLOCK_BYTES],
    pos: usize,
}

impl Aes256Ctr {
    /// Create a keystream for `key` and a 96-bit `nonce`.
    pub fn new(key: &[u8; 32], nonce: &[u8; 12]) -> Self {
        Self {
            cipher: Aes256::new(key.as_slice().into()),
            nonce: *nonce,
            counter: 0,
            block: [0u8; BLOCK_BYTES],
            pos: BLOCK_BYTES,
        }
    }

    fn refill(&mut self) {
        let mut block = Block::default();
        block[..12].copy_from_slice(&self.nonce);
        block[12..].copy_from_slice(&self.counter.to_be_bytes());
        self.cipher.encrypt_block(&mut block);
        self.block.copy_from_slice(&block);
        block.as_mut_slice().zeroize();
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

impl XofReader for Aes256Ctr {
    fn read(&mut self, buffer: &mut [u8]) {
        let mut off = 0;
        while off < buffer.len() {
            if self.pos == BLOCK_BYTES {
                self.refill();
            }
            let take = (BLOCK_BYTES - self.pos).min(buffer.len() - off);
            buffer[off..off + take].copy_from_slice(&self.block[self.pos..self.pos + take]);
            self.pos += take;
            off += take;
        }
    }
}

impl Drop for Aes256Ctr {
    fn drop(&mut self) {
        self.block.zeroize();
        self.nonce.zeroize();
    }
}
