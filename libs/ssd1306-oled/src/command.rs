#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    MemoryMode = 0x20,
    ColumnAddress = 0x21,
    PageAddress = 0x22,
    RightHorizontalScroll = 0x26,
    LeftHorizontalScroll = 0x27,
    VerticalRightHorizontalScroll = 0x29,
    VerticalLeftHorizontalScroll = 0x2A,
    DeactivateScroll = 0x2E,
    ActivateScroll = 0x2F,
    SetStartLine = 0x40,
    SetContrast = 0x81,
    ChargePump = 0x8D,
    SegmentRemap = 0xA0,
    SetVerticalScrollArea = 0xA3,
    DisplayAllOnResume = 0xA4,
    NormalDisplay = 0xA6,
    InvertDisplay = 0xA7,
    SetMultiplex = 0xA8,
    DisplayOff = 0xAE,
    DisplayOn = 0xAF,
    ComScanDecrement = 0xC8,
    SetDisplayOffset = 0xD3,
    SetDisplayClockDiv = 0xD5,
    SetPrecharge = 0xD9,
    SetComPins = 0xDA,
    SetVcomDetect = 0xDB,
}

impl Command {
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// Charge pump enable when the panel runs off the internal regulator.
pub(crate) const CHARGE_PUMP_ON: u8 = 0x14;
/// Phase 1/2 precharge periods for the internal regulator.
pub(crate) const PRECHARGE_PERIODS: u8 = 0xF1;
/// Page range end accepted by the controller as "every page".
pub(crate) const PAGE_END_ALL: u8 = 0xFF;

/// Fixed command sequences. Each one goes out as a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandList {
    /// Display off, clock divider, then the multiplex opcode (ratio follows).
    InitClockAndMux,
    /// Zero offset, start line 0, then the charge pump opcode (mode follows).
    InitOffsetAndPump,
    /// Horizontal addressing, column 127 mapped to SEG0, reversed COM scan.
    InitAddressing,
    /// VCOM deselect level, resume from RAM, normal polarity, no scroll, on.
    InitFinish,
    /// Full page range and column start 0; column end follows.
    DisplayWindow,
    RightScrollHead,
    LeftScrollHead,
    /// Dummy byte, end-of-frame timing, activate.
    HorizontalScrollTail,
    /// Fixed rows of the vertical scroll area; the row count follows.
    VerticalScrollArea,
    DiagRightScrollHead,
    DiagLeftScrollHead,
    /// Vertical offset of one row per step, activate.
    DiagonalScrollTail,
}

const INIT_CLOCK_AND_MUX: [u8; 4] = [
    Command::DisplayOff.byte(),
    Command::SetDisplayClockDiv.byte(),
    0x80,
    Command::SetMultiplex.byte(),
];
const INIT_OFFSET_AND_PUMP: [u8; 4] = [
    Command::SetDisplayOffset.byte(),
    0x00,
    Command::SetStartLine.byte(),
    Command::ChargePump.byte(),
];
const INIT_ADDRESSING: [u8; 4] = [
    Command::MemoryMode.byte(),
    0x00,
    Command::SegmentRemap.byte() | 0x01,
    Command::ComScanDecrement.byte(),
];
const INIT_FINISH: [u8; 6] = [
    Command::SetVcomDetect.byte(),
    0x40,
    Command::DisplayAllOnResume.byte(),
    Command::NormalDisplay.byte(),
    Command::DeactivateScroll.byte(),
    Command::DisplayOn.byte(),
];
const DISPLAY_WINDOW: [u8; 5] = [
    Command::PageAddress.byte(),
    0x00,
    PAGE_END_ALL,
    Command::ColumnAddress.byte(),
    0x00,
];
const RIGHT_SCROLL_HEAD: [u8; 2] = [Command::RightHorizontalScroll.byte(), 0x00];
const LEFT_SCROLL_HEAD: [u8; 2] = [Command::LeftHorizontalScroll.byte(), 0x00];
const HORIZONTAL_SCROLL_TAIL: [u8; 3] = [0x00, 0xFF, Command::ActivateScroll.byte()];
const VERTICAL_SCROLL_AREA: [u8; 2] = [Command::SetVerticalScrollArea.byte(), 0x00];
const DIAG_RIGHT_SCROLL_HEAD: [u8; 2] = [Command::VerticalRightHorizontalScroll.byte(), 0x00];
const DIAG_LEFT_SCROLL_HEAD: [u8; 2] = [Command::VerticalLeftHorizontalScroll.byte(), 0x00];
const DIAGONAL_SCROLL_TAIL: [u8; 2] = [0x01, Command::ActivateScroll.byte()];

impl CommandList {
    pub(crate) fn as_slice(self) -> &'static [u8] {
        match self {
            CommandList::InitClockAndMux => &INIT_CLOCK_AND_MUX,
            CommandList::InitOffsetAndPump => &INIT_OFFSET_AND_PUMP,
            CommandList::InitAddressing => &INIT_ADDRESSING,
            CommandList::InitFinish => &INIT_FINISH,
            CommandList::DisplayWindow => &DISPLAY_WINDOW,
            CommandList::RightScrollHead => &RIGHT_SCROLL_HEAD,
            CommandList::LeftScrollHead => &LEFT_SCROLL_HEAD,
            CommandList::HorizontalScrollTail => &HORIZONTAL_SCROLL_TAIL,
            CommandList::VerticalScrollArea => &VERTICAL_SCROLL_AREA,
            CommandList::DiagRightScrollHead => &DIAG_RIGHT_SCROLL_HEAD,
            CommandList::DiagLeftScrollHead => &DIAG_LEFT_SCROLL_HEAD,
            CommandList::DiagonalScrollTail => &DIAGONAL_SCROLL_TAIL,
        }
    }
}
