//! Effect request ingestion
//!
//! Turns the JSON body of an effect request into validated commands and
//! admits them into the queue. The HTTP server itself lives outside this
//! crate; it hands the raw body over and maps the outcome with
//! [`HttpResponse::from_outcome`].
//!
//! A body is either one effect object or an array of them:
//!
//! ```json
//! {"effect": 1, "count": 2, "speed": 2.0, "color": {"r": 1, "g": 0, "b": 0}}
//! ```

use core::fmt;

use heapless::Vec;
use serde::Deserialize;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::LinearRgb;
use crate::config::MAX_BATCH;
use crate::effect::{EffectCommand, EffectKind, InvalidParameter};
use crate::queue::Sender;

/// Color object of an effect request
///
/// Missing channels are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorPayload {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// One effect object as sent by clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct EffectRequest {
    /// Effect code, `1` = flash, `2` = strobe
    #[serde(default)]
    pub effect: i32,
    pub count: Option<i64>,
    pub intensity: Option<f32>,
    pub speed: Option<f32>,
    /// Pure red when absent
    pub color: Option<ColorPayload>,
}

impl EffectRequest {
    /// Build a validated command, filling absent fields with defaults
    pub fn into_command(self) -> Result<EffectCommand, InvalidParameter> {
        let mut command = EffectCommand::new(EffectKind::from_code(self.effect));

        if let Some(count) = self.count {
            command.repeat_count = u32::try_from(count).map_err(|_| InvalidParameter::Count)?;
        }
        if let Some(intensity) = self.intensity {
            command.intensity = intensity;
        }
        if let Some(speed) = self.speed {
            command.speed = speed;
        }
        if let Some(color) = self.color {
            command.color = LinearRgb::new(color.r, color.g, color.b);
        }

        command.validate()?;
        Ok(command)
    }
}

/// Parsed request body
pub type Batch = Vec<EffectRequest, MAX_BATCH>;

/// Successful admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of commands pushed into the queue
    pub accepted: usize,
}

/// Reasons a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestError {
    /// There was no body to parse
    MissingBody,
    /// The body is not a valid effect object or array
    MalformedPayload,
    /// The queue filled up. Commands pushed before that stay queued.
    QueueFull { accepted: usize, rejected: usize },
    InvalidSpeed,
    InvalidCount,
    InvalidIntensity,
    InvalidColor,
}

impl IngestError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingBody => "no body",
            Self::MalformedPayload => "invalid json",
            Self::QueueFull { .. } => "queue full",
            Self::InvalidSpeed => InvalidParameter::Speed.as_str(),
            Self::InvalidCount => InvalidParameter::Count.as_str(),
            Self::InvalidIntensity => InvalidParameter::Intensity.as_str(),
            Self::InvalidColor => InvalidParameter::Color.as_str(),
        }
    }

    /// HTTP status the request handler should answer with
    pub const fn status(self) -> u16 {
        match self {
            Self::MissingBody => 403,
            _ => 400,
        }
    }
}

impl From<InvalidParameter> for IngestError {
    fn from(parameter: InvalidParameter) -> Self {
        match parameter {
            InvalidParameter::Speed => Self::InvalidSpeed,
            InvalidParameter::Count => Self::InvalidCount,
            InvalidParameter::Intensity => Self::InvalidIntensity,
            InvalidParameter::Color => Self::InvalidColor,
        }
    }
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull { accepted, rejected } => write!(
                f,
                "{} ({} accepted, {} rejected)",
                self.as_str(),
                accepted,
                rejected
            ),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Plain text response for the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: &'static str,
}

impl HttpResponse {
    pub fn from_outcome(outcome: &Result<IngestReport, IngestError>) -> Self {
        match outcome {
            Ok(_) => Self {
                status: 200,
                body: "success",
            },
            Err(error) => Self {
                status: error.status(),
                body: error.as_str(),
            },
        }
    }
}

/// Parse a request body into effect objects.
///
/// The first non-whitespace byte selects between a single object and an
/// array. Arrays longer than [`MAX_BATCH`] are malformed.
pub fn parse(body: &[u8]) -> Result<Batch, IngestError> {
    let first = body.iter().copied().find(|byte| !byte.is_ascii_whitespace());

    match first {
        None => Err(IngestError::MissingBody),
        Some(b'[') => serde_json_core::from_slice::<Batch>(body)
            .map(|(batch, _)| batch)
            .map_err(|_| IngestError::MalformedPayload),
        Some(_) => {
            let (request, _) = serde_json_core::from_slice::<EffectRequest>(body)
                .map_err(|_| IngestError::MalformedPayload)?;
            Batch::from_slice(&[request]).map_err(|()| IngestError::MalformedPayload)
        }
    }
}

/// Parse, validate and enqueue every effect of a request body.
///
/// A body that parses is refused as [`IngestError::QueueFull`] when the queue
/// is already full, whatever it contains. Otherwise the whole body is
/// validated before anything is pushed, so a parameter error leaves the queue
/// untouched. Admission itself is not atomic: when the queue fills up halfway
/// through a batch, the commands pushed so far stay queued and the rest are
/// reported as rejected.
pub fn submit<const SIZE: usize>(
    body: Option<&[u8]>,
    queue: Sender<'_, EffectCommand, SIZE>,
) -> Result<IngestReport, IngestError> {
    let body = body.ok_or(IngestError::MissingBody)?;
    let batch = parse(body)?;

    if queue.is_full() {
        #[cfg(feature = "esp32-log")]
        println!("[ingest.submit] queue full, {} effects rejected", batch.len());
        return Err(IngestError::QueueFull {
            accepted: 0,
            rejected: batch.len(),
        });
    }

    let commands = batch
        .into_iter()
        .map(EffectRequest::into_command)
        .collect::<Result<Vec<EffectCommand, MAX_BATCH>, _>>()?;

    let total = commands.len();
    for (index, command) in commands.into_iter().enumerate() {
        if queue.try_push(command).is_err() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ingest.submit] queue full after {} of {} effects",
                index, total
            );
            return Err(IngestError::QueueFull {
                accepted: index,
                rejected: total - index,
            });
        }
    }

    #[cfg(feature = "esp32-log")]
    println!("[ingest.submit] queued {} effects", total);

    Ok(IngestReport { accepted: total })
}
