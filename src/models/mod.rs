pub mod campaign;
pub mod empty;
pub mod list;
pub mod membership;
pub mod page;
pub mod person;
pub mod person_list;
pub mod reference;
pub mod template;

pub use campaign::Campaign;
pub use empty::Empty;
pub use list::List;
pub use membership::Membership;
pub use page::Page;
pub use person::{Person, SpecialAttribute};
pub use person_list::PersonList;
pub use reference::{ListReference, PersonReference};
pub use template::{RenderedTemplate, Template};

use crate::domain::ports::Model;

// serde 輸出與 to_json 相同
macro_rules! serialize_with_to_json {
    ($($model:ty),* $(,)?) => {
        $(
            impl serde::Serialize for $model {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(&Model::to_json(self), serializer)
                }
            }
        )*
    };
}

serialize_with_to_json!(
    Campaign,
    Empty,
    List,
    ListReference,
    Membership,
    Page,
    Person,
    PersonList,
    PersonReference,
    RenderedTemplate,
    Template,
);
