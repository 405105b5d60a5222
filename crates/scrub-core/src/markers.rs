//! JPEG 标记码表（所有标记码前均有 0xFF 前缀）

/// 标记前缀
pub const PREFIX: u8 = 0xFF;
/// 填充字节（标记位置上出现时跳过并告警）
pub const FILL: u8 = 0x00;

pub const SOF: u8 = 0xC0; // Start of Frame
pub const SOF2: u8 = 0xC2; // Start of Frame，渐进式 Huffman
pub const DHT: u8 = 0xC4; // Define Huffman Tables
pub const JPG: u8 = 0xC8; // 保留给 JPEG 扩展
pub const DAC: u8 = 0xCC; // Arithmetic coding conditioning
pub const RST0: u8 = 0xD0; // Restart interval termination
pub const RST7: u8 = 0xD7; // Restart（最大值）
pub const SOI: u8 = 0xD8; // Start of Image
pub const EOI: u8 = 0xD9; // End of Image
pub const SOS: u8 = 0xDA; // Start of Scan
pub const DQT: u8 = 0xDB; // Define quantization tables
pub const DNL: u8 = 0xDC; // Define number of lines
pub const DRI: u8 = 0xDD; // Define restart interval
pub const DHP: u8 = 0xDE; // Define hierarchical progression
pub const EXP: u8 = 0xDF; // Expand reference components
pub const APP0: u8 = 0xE0; // 应用段起点（APPn = 0xE0..=0xEF）
pub const JPG0: u8 = 0xF0; // 保留给 JPEG 扩展（JPGn = 0xF0..=0xFD）
pub const COM: u8 = 0xFE; // Comment

/// 可移除段阈值：标记码 >= 此值的段（APPn / JPGn / COM 以及 0xFF）全部丢弃
pub const REMOVABLE_THRESHOLD: u8 = APP0;

/// 判断某标记码对应的段是否应被移除
///
/// 按数值阈值判断，而不是枚举已命名的常量：0xF0..=0xFD 保留区同样会被移除。
#[inline]
pub fn is_removable(code: u8) -> bool {
    code >= REMOVABLE_THRESHOLD
}

/// 标记码的可读名称（用于日志与报告）
pub fn marker_name(code: u8) -> String {
    match code {
        SOF..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => format!("SOF{}", code - SOF),
        DHT => "DHT".to_string(),
        JPG => "JPG".to_string(),
        DAC => "DAC".to_string(),
        RST0..=RST7 => format!("RST{}", code - RST0),
        SOI => "SOI".to_string(),
        EOI => "EOI".to_string(),
        SOS => "SOS".to_string(),
        DQT => "DQT".to_string(),
        DNL => "DNL".to_string(),
        DRI => "DRI".to_string(),
        DHP => "DHP".to_string(),
        EXP => "EXP".to_string(),
        APP0..=0xEF => format!("APP{}", code - APP0),
        JPG0..=0xFD => format!("JPG{}", code - JPG0),
        COM => "COM".to_string(),
        _ => format!("0x{:02X}", code),
    }
}
