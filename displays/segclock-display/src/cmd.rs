//! SSD1306 command bytes and the power-up sequence

/// SSD1306 commands
pub mod op {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Oscillator frequency / clock divide ratio (reset default)
const CLOCK_DIV_DEFAULT: u8 = 0x80;
/// 32 COM lines (MUX = rows - 1)
const MUX_32_ROWS: u8 = 0x1F;
/// Internal DC/DC charge pump on
const CHARGE_PUMP_ENABLE: u8 = 0x14;
/// Column pointer auto-increments and wraps to the next page
const HORIZONTAL_ADDRESSING: u8 = 0x00;
/// Sequential COM pin layout used by 128x32 panels
const COM_PINS_128X32: u8 = 0x02;
/// Phase 1 = 1 DCLK, phase 2 = 15 DCLK
const PRECHARGE_PERIOD: u8 = 0xF1;
/// ~0.77 x VCC
const VCOM_DESELECT_LEVEL: u8 = 0x40;

/// Number of bytes in the power-up sequence
pub const INIT_LEN: usize = 25;

/// Build the power-up command sequence for a 128x32 panel
///
/// The order matters: geometry and horizontal addressing are configured
/// while the panel is off and must be in place before `DISPLAY_ON`.
/// Only the contrast level varies between panels.
pub const fn init_sequence(contrast: u8) -> [u8; INIT_LEN] {
    [
        op::DISPLAY_OFF,
        op::SET_CLOCK_DIV,
        CLOCK_DIV_DEFAULT,
        op::SET_MUX_RATIO,
        MUX_32_ROWS,
        op::SET_DISPLAY_OFFSET,
        0x00,
        op::SET_START_LINE,
        op::SET_CHARGE_PUMP,
        CHARGE_PUMP_ENABLE,
        op::SET_MEMORY_MODE,
        HORIZONTAL_ADDRESSING,
        op::SET_SEG_REMAP,
        op::SET_COM_SCAN_DEC,
        op::SET_COM_PINS,
        COM_PINS_128X32,
        op::SET_CONTRAST,
        contrast,
        op::SET_PRECHARGE,
        PRECHARGE_PERIOD,
        op::SET_VCOM_DESELECT,
        VCOM_DESELECT_LEVEL,
        op::DISPLAY_FOLLOW_RAM,
        op::SET_NORMAL,
        op::DISPLAY_ON,
    ]
}

/// Page-select command for `page`
pub const fn page_addr(page: u8) -> u8 {
    op::SET_PAGE_ADDR.wrapping_add(page)
}

/// Low-nibble column command for `column`
pub const fn low_column(column: u8) -> u8 {
    op::SET_LOW_COLUMN + (column & 0x0F)
}

/// High-nibble column command for `column`
pub const fn high_column(column: u8) -> u8 {
    op::SET_HIGH_COLUMN + ((column >> 4) & 0x0F)
}
