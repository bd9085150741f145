pub mod classifier;
pub mod error;
pub mod input;
pub mod inspect;
pub mod output;
pub mod rule;

pub use classifier::{classify, detect, Classification, Detection, Label};
pub use error::{DetectError, Result};
pub use input::{clean, BOM};
pub use inspect::{first_char, CharInfo, NO_NAME};
pub use output::{write_label, DEFAULT_OUTPUT_FILE};
pub use rule::{BuiltinRule, CompiledRule, RuleSet, BUILTIN_RULES};
