/// Panels per grid side; the wall holds `PANEL_GRID_SIZE * PANEL_GRID_SIZE` photos.
pub const PANEL_GRID_SIZE: u32 = 20;

/// Distance between neighbouring panel centres (world units).
pub const PANEL_SPACING: f32 = 10.0;

/// Edge length of a single square photo panel.
pub const PANEL_SIZE: f32 = 10.0;

/// Panels spawn with a height drawn from `[0, PANEL_MAX_HEIGHT)`.
pub const PANEL_MAX_HEIGHT: f32 = 40.0;

/// Edge length of the square ground plane.
pub const GROUND_SIZE: f32 = 200.0;

/// Ground sits slightly below the rest height of the panels.
pub const GROUND_HEIGHT: f32 = -0.5;

/// Base colour shared by the ground and the untextured photo placeholders.
pub const SURFACE_GREY: [u8; 3] = [0x77, 0x77, 0x77];
