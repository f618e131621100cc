pub mod button;
pub mod card;
pub mod form;
pub mod profile;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CardVariant};
pub use form::{Alert, Badge, Input, Label};
pub use profile::{Avatar, Progress};
