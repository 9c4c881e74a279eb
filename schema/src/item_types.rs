use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display)]
pub enum ItemKind {
    Medicine,
    #[strum(to_string = "Status Cure")]
    StatusCure,
    Training,
}
