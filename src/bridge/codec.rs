// In: src/bridge/codec.rs

//! A configured codec facade.
//!
//! `IntegerCodec` binds a `CodecConfig` to a concrete byte compressor and keeps
//! a decompression working space it can reuse across calls, so a reader pulling
//! many index lists out of one file allocates that space once.

use crate::config::{BackendConfig, CodecConfig};
use crate::error::IntCodecError;
use crate::kernels::bitcast::{as_words, as_words_mut};
use crate::kernels::lz4::Lz4Compressor;
use crate::kernels::sizing::decompression_working_space_size;
use crate::kernels::zstd::ZstdCompressor;
use crate::pipeline;
use crate::traits::{CodecWord, FastCompressor};

//==================================================================================
// 1. Backend Dispatch
//==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Lz4(Lz4Compressor),
    Zstd(ZstdCompressor),
}

impl From<BackendConfig> for Backend {
    fn from(config: BackendConfig) -> Self {
        match config {
            BackendConfig::Lz4 => Backend::Lz4(Lz4Compressor::new()),
            BackendConfig::Zstd { level } => Backend::Zstd(ZstdCompressor::new(level)),
        }
    }
}

impl FastCompressor for Backend {
    fn max_compressed_size(&self, input_len: usize) -> usize {
        match self {
            Backend::Lz4(c) => c.max_compressed_size(input_len),
            Backend::Zstd(c) => c.max_compressed_size(input_len),
        }
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, IntCodecError> {
        match self {
            Backend::Lz4(c) => c.compress(src, dst),
            Backend::Zstd(c) => c.compress(src, dst),
        }
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize {
        match self {
            Backend::Lz4(c) => c.decompress(src, dst),
            Backend::Zstd(c) => c.decompress(src, dst),
        }
    }
}

//==================================================================================
// 2. The Facade
//==================================================================================

#[derive(Debug, Clone)]
pub struct IntegerCodec {
    config: CodecConfig,
    backend: Backend,
    workspace: Vec<u8>,
}

impl Default for IntegerCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl IntegerCodec {
    pub fn new(config: CodecConfig) -> Self {
        log::debug!("IntegerCodec: backend {:?}", config.backend);
        Self {
            backend: Backend::from(config.backend),
            config,
            workspace: Vec::new(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn compressed_buffer_size(&self, num_ints: usize) -> usize {
        pipeline::compressed_buffer_size(&self.backend, num_ints)
    }

    pub fn compress_to_buffer<T: CodecWord>(
        &self,
        ints: &[T],
        compressed: &mut [u8],
    ) -> Result<usize, IntCodecError> {
        pipeline::compress_words(&self.backend, as_words(ints), compressed)
    }

    pub fn compress<T: CodecWord>(&self, ints: &[T]) -> Result<Vec<u8>, IntCodecError> {
        let mut out = vec![0u8; self.compressed_buffer_size(ints.len())];
        let n = self.compress_to_buffer(ints, &mut out)?;
        out.truncate(n);
        Ok(out)
    }

    /// Stateless decompression with an optional caller-owned working space.
    pub fn decompress_from_buffer<T: CodecWord>(
        &self,
        compressed: &[u8],
        ints: &mut [T],
        working_space: Option<&mut [u8]>,
    ) -> Result<usize, IntCodecError> {
        pipeline::decompress_words(&self.backend, compressed, as_words_mut(ints), working_space)
    }

    /// Decompresses using the codec's own working space, growing it as needed.
    pub fn decompress_pooled<T: CodecWord>(
        &mut self,
        compressed: &[u8],
        ints: &mut [T],
    ) -> Result<usize, IntCodecError> {
        let needed = decompression_working_space_size(ints.len());
        if self.workspace.len() < needed {
            self.workspace.resize(needed, 0);
        }
        pipeline::decompress_words(
            &self.backend,
            compressed,
            as_words_mut(ints),
            Some(self.workspace.as_mut_slice()),
        )
    }

    /// Bytes currently held for pooled decompression.
    pub fn workspace_capacity(&self) -> usize {
        self.workspace.len()
    }
}
