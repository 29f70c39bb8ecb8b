use super::Model;
use crate::{codec::DATETIME_LAYOUT, AutoStrategy, Result, Scalar};
use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use std::sync::{Mutex, PoisonError};

/// Milliseconds between the Unix epoch and 2020-01-01T00:00:00Z.
const SNOWFLAKE_EPOCH_MS: i64 = 1_577_836_800_000;

const NODE_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;
const NODE_MASK: u64 = (1 << NODE_BITS) - 1;

/// Produces values for client-generated fields.
#[derive(Debug)]
pub struct Generator {
    node: u16,
    state: Mutex<SnowflakeState>,
}

#[derive(Debug, Default)]
struct SnowflakeState {
    last_ms: i64,
    sequence: u64,
}

impl Generator {
    /// Creates a generator stamping snowflake ids with `node`. Only the low
    /// 10 bits of the node id are used.
    pub fn new(node: u16) -> Generator {
        Generator {
            node,
            state: Mutex::new(SnowflakeState::default()),
        }
    }

    pub fn node(&self) -> u16 {
        self.node
    }

    /// A random UUID rendered as hyphenated text.
    pub fn uuid(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// A time-ordered 64-bit id:
    /// `ms since 2020-01-01 << 22 | node << 12 | sequence`.
    pub fn snowflake(&self) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let mut now = elapsed_ms().max(state.last_ms);
        if now == state.last_ms {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond
                while now <= state.last_ms {
                    std::hint::spin_loop();
                    now = elapsed_ms();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_ms = now;

        ((now as u64) << (NODE_BITS + SEQUENCE_BITS))
            | ((u64::from(self.node) & NODE_MASK) << SEQUENCE_BITS)
            | state.sequence
    }

    /// The current UTC date and time, truncated to seconds.
    pub fn now(&self) -> Result<DateTime> {
        let now = Timestamp::from_second(Timestamp::now().as_second())?;
        Ok(TimeZone::UTC.to_datetime(now))
    }

    /// The seed for a generation strategy, or `None` when values are left to
    /// the database.
    fn seed(&self, strategy: &AutoStrategy) -> Result<Option<Scalar>> {
        Ok(match strategy {
            AutoStrategy::Increment => None,
            AutoStrategy::Uuid => Some(Scalar::String(self.uuid())),
            AutoStrategy::Snowflake => Some(Scalar::U64(self.snowflake())),
            AutoStrategy::DateTime => Some(Scalar::String(
                self.now()?.strftime(DATETIME_LAYOUT).to_string(),
            )),
        })
    }
}

impl Default for Generator {
    fn default() -> Generator {
        Generator::new(0)
    }
}

fn elapsed_ms() -> i64 {
    Timestamp::now().as_millisecond() - SNOWFLAKE_EPOCH_MS
}

impl Model {
    /// Fills empty fields whose values are generated client side.
    ///
    /// A field is empty when it is nil or holds the zero datum. Generated
    /// seeds are coerced to the field's kind, so a snowflake id can fill any
    /// integer field wide enough to hold it.
    pub fn assign_generated(&mut self, generator: &Generator) -> Result<()> {
        for field in self.fields.values_mut() {
            let Some(strategy) = field.spec().auto().copied() else {
                continue;
            };

            if !field.value().is_zero() {
                continue;
            }

            let Some(seed) = generator.seed(&strategy)? else {
                continue;
            };

            let value = field.ty().construct(Some(&seed))?;
            *field.value_mut() = value;

            tracing::trace!(field = field.name(), %strategy, "assigned generated value");
        }

        Ok(())
    }
}
