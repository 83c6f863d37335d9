pub const COMS_BAUD_RATE: u32 = 115_200;

pub const ORGAN_BANNER: &[u8] = b"----- Serial Organ -----\r\n";
pub const ORGAN_PROMPT: &[u8] = b"Ready to play. Hit some keys...\r\n";
