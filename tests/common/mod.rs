//! Shared helpers for integration tests: minimal FIT files built in memory

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const RECORD_MESG_NUM: u8 = 20;
pub const FIELD_HEART_RATE: u8 = 3;
pub const FIELD_CADENCE: u8 = 4;
pub const BASE_TYPE_UINT8: u8 = 0x02;

pub fn fit_crc(data: &[u8]) -> u16 {
    const CRC_TABLE: [u16; 16] = [
        0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
        0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
    ];

    let mut crc = 0u16;
    for &byte in data {
        let mut tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc ^= tmp ^ CRC_TABLE[(byte & 0xF) as usize];

        tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc ^= tmp ^ CRC_TABLE[((byte >> 4) & 0xF) as usize];
    }
    crc
}

/// Definition message for a `record` message with single-byte unsigned fields
pub fn record_definition(local: u8, field_numbers: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x40 | local, 0, 0, RECORD_MESG_NUM, 0, field_numbers.len() as u8];
    for &number in field_numbers {
        bytes.extend_from_slice(&[number, 1, BASE_TYPE_UINT8]);
    }
    bytes
}

pub fn data_message(local: u8, values: &[u8]) -> Vec<u8> {
    let mut bytes = vec![local];
    bytes.extend_from_slice(values);
    bytes
}

pub fn build_fit_file(messages: &[Vec<u8>]) -> Vec<u8> {
    let data: Vec<u8> = messages.concat();

    let mut file = vec![14u8, 0x10];
    file.extend_from_slice(&2093u16.to_le_bytes());
    file.extend_from_slice(&(data.len() as u32).to_le_bytes());
    file.extend_from_slice(b".FIT");
    let header_crc = fit_crc(&file);
    file.extend_from_slice(&header_crc.to_le_bytes());

    file.extend_from_slice(&data);
    let file_crc = fit_crc(&file);
    file.extend_from_slice(&file_crc.to_le_bytes());
    file
}

/// Two samples: heart rate only, then heart rate with cadence
pub fn ride_fit_bytes() -> Vec<u8> {
    build_fit_file(&[
        record_definition(0, &[FIELD_HEART_RATE]),
        data_message(0, &[120]),
        record_definition(1, &[FIELD_HEART_RATE, FIELD_CADENCE]),
        data_message(1, &[125, 80]),
    ])
}

pub fn write_ride(dir: &Path) -> PathBuf {
    let path = dir.join("ride.fit");
    fs::write(&path, ride_fit_bytes()).expect("Failed to write FIT file");
    path
}

pub fn read_csv_lines(path: &Path) -> Vec<Vec<String>> {
    let content = fs::read_to_string(path).expect("Failed to read generated CSV file");
    content
        .lines()
        .map(|line| line.split(',').map(|s| s.to_string()).collect())
        .collect()
}
