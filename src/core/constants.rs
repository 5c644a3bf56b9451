//! Endpoint paths and deployment defaults for the Mapabc web API.
//! Keeping them in a single place makes it easier to retarget a deployment.

/// Prefix identifying short-hand resource URLs (`mapabc://...`).
pub const MAPABC_SCHEME: &str = "mapabc:";

/// Style documents are served from this path on the API origin.
pub const STYLE_ENDPOINT: &str = "/webglapi/styles";

/// Sprite images and sprite metadata.
pub const SPRITE_ENDPOINT: &str = "/webglapi/sprite";

/// Glyph ranges (PBF fonts).
pub const GLYPHS_ENDPOINT: &str = "/webglapi/fonts";

/// Unresolved glyph template parameters; the fetch layer substitutes them.
pub const FONTSTACK_PARAM: &str = "n={fontstack}";
pub const RANGE_PARAM: &str = "r={range}";

/// Query flags every style request must carry exactly once.
pub const ADD_SOURCE_KEY: &str = "addSource";
pub const ADD_SOURCE_PARAM: &str = "addSource=true";
pub const SOURCE_TYPE_KEY: &str = "sourceType";
pub const SOURCE_TYPE_PARAM: &str = "sourceType=http";

/// Query key carrying the access token.
pub const ACCESS_TOKEN_KEY: &str = "ak";

/// Dropped from style/sprite URLs when the API origin is plain `http`.
pub const SECURE_PARAM: &str = "secure";

/// Tokens starting with this character are secret-scope credentials.
pub const SECRET_TOKEN_PREFIX: char = 's';

pub const ACCESS_TOKEN_HELP: &str =
    "See https://www.mapabc.com/api-documentation/#access-tokens-and-token-scopes";

/// Default API origin of a stock deployment.
pub const DEFAULT_API_URL: &str = "http://121.36.99.212:35001";

pub const DEFAULT_FEEDBACK_URL: &str = "https://apps.mapabc.com/feedback";

/// Upper bound on concurrently loading images, handed to the fetch layer.
pub const DEFAULT_MAX_PARALLEL_IMAGE_REQUESTS: usize = 16;

/// API origins with a companion events endpoint, and that endpoint.
pub const EVENTS_ENDPOINTS: [(&str, &str); 2] = [
    ("https://api.mapabc.cn", "https://events.mapabc.cn/events/v2"),
    ("https://api.mapabc.com", "https://events.mapabc.com/events/v2"),
];
