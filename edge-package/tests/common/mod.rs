// Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One record to write into a test archive.
pub enum Record {
    File(String, Vec<u8>),
    Dir(String),
}

/// Builds package archives inside a private temporary directory.
pub struct PackageFixture {
    temp_dir: TempDir,
}

impl PackageFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a gzip-compressed tar archive.
    pub fn tar_gz(&self, name: &str, records: &[Record]) -> Result<PathBuf> {
        let path = self.dir().join(name);
        let encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        append_records(&mut builder, records)?;
        builder.into_inner()?.finish()?;
        Ok(path)
    }

    /// Write an uncompressed tar archive.
    pub fn plain_tar(&self, name: &str, records: &[Record]) -> Result<PathBuf> {
        let path = self.dir().join(name);
        let mut builder = tar::Builder::new(File::create(&path)?);
        append_records(&mut builder, records)?;
        builder.finish()?;
        Ok(path)
    }

    /// Write `members` as consecutive gzip members of one file.
    pub fn gzip_members(&self, name: &str, members: &[&[u8]]) -> Result<PathBuf> {
        let path = self.dir().join(name);
        let mut out = File::create(&path)?;
        for member in members {
            let mut encoder = GzEncoder::new(&mut out, Compression::default());
            io::Write::write_all(&mut encoder, member)?;
            encoder.finish()?;
        }
        Ok(path)
    }

    pub fn raw(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir().join(name);
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Names of everything currently in the fixture directory.
    pub fn listing(&self) -> Result<Vec<String>> {
        let mut names = fs::read_dir(self.dir())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

/// An uncompressed tar archive held in memory.
pub fn tar_bytes(records: &[Record]) -> Result<Vec<u8>> {
    let mut builder = tar::Builder::new(Vec::new());
    append_records(&mut builder, records)?;
    Ok(builder.into_inner()?)
}

pub fn file(name: &str, data: impl AsRef<[u8]>) -> Record {
    Record::File(name.to_string(), data.as_ref().to_vec())
}

pub fn dir(name: &str) -> Record {
    Record::Dir(name.to_string())
}

/// Deterministic bytes that deflate barely compresses.
pub fn noise(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn append_records<W: io::Write>(builder: &mut tar::Builder<W>, records: &[Record]) -> Result<()> {
    for record in records {
        let mut header = tar::Header::new_gnu();
        match record {
            Record::File(name, data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                builder.append_data(&mut header, name, data.as_slice())?;
            }
            Record::Dir(name) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                builder.append_data(&mut header, name, io::empty())?;
            }
        }
    }
    Ok(())
}
