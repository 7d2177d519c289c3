//! Pong constants. Speeds are in pixels per simulation step.

/// Paddle width in pixels.
pub const PADDLE_WIDTH: i32 = 4;

/// Paddle height in pixels.
pub const PADDLE_HEIGHT: i32 = 30;

/// Side length of the square ball.
pub const BALL_SIZE: i32 = 4;

/// Player paddle movement per button press.
pub const PADDLE_SPEED: i32 = 5;

/// Maximum AI paddle movement per step.
pub const AI_SPEED: i32 = 3;

/// The AI only moves when the ball center is further than this from its paddle center.
pub const AI_DEAD_ZONE: i32 = 5;

/// Horizontal serve speeds; one is picked at random.
pub const SERVE_VX: [i32; 2] = [-3, 3];

/// Vertical serve speeds; one is picked at random.
pub const SERVE_VY: [i32; 4] = [-2, -1, 1, 2];
