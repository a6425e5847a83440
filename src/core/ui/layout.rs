//=========================================================================
// Screen Layouts
//=========================================================================
//
// Region placement on the 1280×720 logical screen.
//
//=========================================================================

use super::region::ClickRegion;

//=== Screen ==============================================================

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

//=== Labels ==============================================================

pub const BACK: &str = "BACK";
pub const REACTION_TIME: &str = "Reaction Time";
pub const NUMBER_MEMORY: &str = "Number Memory";
pub const VERBAL_MEMORY: &str = "Verbal Memory";
pub const REACTION_PAD: &str = "Reaction Pad";
pub const TEXT_BOX: &str = "Text Box";
pub const NEW: &str = "New";
pub const SHOWN: &str = "Shown";

//=== Regions =============================================================

const TILE: f32 = 250.0;
const TILE_Y: f32 = SCREEN_HEIGHT / 3.0;
const VERBAL_X: f32 = SCREEN_WIDTH / 13.0;

pub const BACK_BUTTON: ClickRegion = ClickRegion::new(BACK, 15.0, 20.0, 100.0, 30.0);

pub const MENU: [ClickRegion; 4] = [
    ClickRegion::new(REACTION_TIME, SCREEN_WIDTH / 2.0 - 500.0, TILE_Y, TILE, TILE),
    ClickRegion::new(NUMBER_MEMORY, SCREEN_WIDTH / 2.0 - 125.0, TILE_Y, TILE, TILE),
    ClickRegion::new(VERBAL_MEMORY, SCREEN_WIDTH / 2.0 + 250.0, TILE_Y, TILE, TILE),
    BACK_BUTTON,
];

pub const REACTION: [ClickRegion; 2] = [
    BACK_BUTTON,
    ClickRegion::new(REACTION_PAD, SCREEN_WIDTH / 2.0 - 500.0, SCREEN_HEIGHT / 4.0, 1000.0, 500.0),
];

pub const DIGIT_SPAN: [ClickRegion; 2] = [
    BACK_BUTTON,
    ClickRegion::new(TEXT_BOX, SCREEN_WIDTH / 2.0 - 600.0, SCREEN_HEIGHT / 1.5, 1200.0, 100.0),
];

pub const WORD_RECOGNITION: [ClickRegion; 3] = [
    BACK_BUTTON,
    ClickRegion::new(SHOWN, VERBAL_X, SCREEN_HEIGHT / 1.7, 225.0, 75.0),
    ClickRegion::new(NEW, VERBAL_X, SCREEN_HEIGHT / 3.0, 225.0, 75.0),
];

//=========================================================================
// Unit Tests
//=========================================================================
