//! [`Avatar`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

define_kind! {
    #[doc = "Gender an [`Avatar`] is drawn with."]
    enum Gender {
        #[doc = "Male."]
        Male,

        #[doc = "Female."]
        Female,
    }
}

define_kind! {
    #[doc = "Training style an [`Avatar`] represents."]
    enum Category {
        #[doc = "Strength training."]
        Strength,

        #[doc = "Cardio training."]
        Cardio,

        #[doc = "Flexibility training."]
        Flexibility,

        #[doc = "Agility training."]
        Agility,

        #[doc = "Combat sports."]
        Combat,

        #[doc = "No particular style."]
        General,
    }
}

/// Picture a user represents themselves with.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Avatar {
    /// ID of this [`Avatar`].
    pub id: Id,

    /// Human-readable name of this [`Avatar`].
    pub name: String,

    /// [`Gender`] of this [`Avatar`].
    pub gender: Gender,

    /// [`Category`] of this [`Avatar`].
    pub category: Category,
}

impl Avatar {
    /// Returns the image URL of this [`Avatar`].
    #[must_use]
    pub fn url(&self) -> String {
        url(Some(&self.id))
    }
}

/// ID of an [`Avatar`], like `weightlifter-male`.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Base URL of the avatar images.
const IMAGES_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Background colors of the avatar images.
const BACKGROUND: &str = "b6e3f4,c0aede,d1d4f9";

/// Returns the image URL of the [`Avatar`] with the provided [`Id`].
///
/// Users without a selected [`Avatar`] get a default image.
#[must_use]
pub fn url(id: Option<&Id>) -> String {
    match id {
        Some(id) => format!("{IMAGES_URL}?seed={id}&backgroundColor={BACKGROUND}"),
        None => format!("{IMAGES_URL}?seed=default-user"),
    }
}

/// Returns the image URL of the [`Avatar`] with the provided [`Id`], sized
/// to `size` pixels.
#[must_use]
pub fn preview_url(id: &Id, size: u16) -> String {
    format!("{IMAGES_URL}?seed={id}&size={size}&backgroundColor={BACKGROUND}")
}

/// Request for selecting an [`Avatar`].
#[derive(Clone, Debug, Serialize)]
pub struct Selection {
    /// [`Id`] of the selected [`Avatar`].
    pub avatar_id: Id,
}

#[cfg(test)]
mod spec {
    use super::{preview_url, url, Avatar, Category, Gender, Id};

    #[test]
    fn image_urls() {
        let id = Id::from("runner-female");
        assert_eq!(
            url(Some(&id)),
            "https://api.dicebear.com/7.x/avataaars/svg\
             ?seed=runner-female&backgroundColor=b6e3f4,c0aede,d1d4f9",
        );
        assert_eq!(
            url(None),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=default-user",
        );
        assert_eq!(
            preview_url(&id, 200),
            "https://api.dicebear.com/7.x/avataaars/svg\
             ?seed=runner-female&size=200&backgroundColor=b6e3f4,c0aede,d1d4f9",
        );
    }

    #[test]
    fn deserializes_backend_avatar() {
        let avatar: Avatar = serde_json::from_str(
            r#"{
                "id": "weightlifter-male",
                "name": "Weightlifter",
                "gender": "male",
                "category": "strength"
            }"#,
        )
        .unwrap();
        assert_eq!(avatar.gender, Gender::Male);
        assert_eq!(avatar.category, Category::Strength);
        assert!(avatar.url().contains("seed=weightlifter-male"));
    }
}
