//! Canonical 44-byte RIFF/WAVE container for mono 16-bit PCM.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::SynthError;
use crate::waveform::SAMPLE_RATE;

pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;
pub const HEADER_LEN: usize = 44;

const PCM_FORMAT: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;
const BYTES_PER_SAMPLE: usize = (BITS_PER_SAMPLE / 8) as usize;

/// Format fields read back from a WAV header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Length of the data chunk in bytes.
    pub data_len: u32,
}

/// Builds the header for a data chunk holding `sample_count` samples.
pub fn header(sample_count: usize) -> Result<Vec<u8>, SynthError> {
    let data_len = sample_count
        .checked_mul(BYTES_PER_SAMPLE)
        .and_then(|len| u32::try_from(len).ok())
        .filter(|len| len.checked_add(36).is_some())
        .ok_or(SynthError::TooLong {
            samples: sample_count,
        })?;

    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);

    let mut bytes = Vec::with_capacity(HEADER_LEN);

    // RIFF header
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // fmt chunk
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    bytes.extend_from_slice(&PCM_FORMAT.to_le_bytes());
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());

    Ok(bytes)
}

/// Writes `samples` to `path`, replacing any existing file.
///
/// The header goes out first, then each sample in generation order.
pub fn write_wav(path: &Path, samples: &[i16]) -> Result<(), SynthError> {
    let header = header(samples.len())?;
    let io_error = |source| SynthError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    writer.write_all(&header).map_err(io_error)?;
    for sample in samples {
        writer.write_all(&sample.to_le_bytes()).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)
}

fn u16_at(bytes: &[u8], offset: usize) -> Option<u16> {
    let field = bytes.get(offset..offset + 2)?;
    field.try_into().ok().map(u16::from_le_bytes)
}

fn u32_at(bytes: &[u8], offset: usize) -> Option<u32> {
    let field = bytes.get(offset..offset + 4)?;
    field.try_into().ok().map(u32::from_le_bytes)
}

/// Reads the canonical header back. Returns `None` for anything that is not a
/// PCM RIFF/WAVE file with the fmt chunk first.
pub fn parse_header(bytes: &[u8]) -> Option<WavHeader> {
    let tag = |offset: usize, expected: &[u8]| bytes.get(offset..offset + 4) == Some(expected);
    if !(tag(0, b"RIFF") && tag(8, b"WAVE") && tag(12, b"fmt ") && tag(36, b"data")) {
        return None;
    }
    if u16_at(bytes, 20)? != PCM_FORMAT {
        return None;
    }

    Some(WavHeader {
        channels: u16_at(bytes, 22)?,
        sample_rate: u32_at(bytes, 24)?,
        bits_per_sample: u16_at(bytes, 34)?,
        data_len: u32_at(bytes, 40)?,
    })
}
