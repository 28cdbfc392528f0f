use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::review::models::Review;

pub mod delete_review;
pub mod list_movie_reviews;
pub mod list_user_reviews;
pub mod save_review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub id: String,
    pub movie_id: i32,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub user_id: String,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            movie_id: review.movie_id.value(),
            rating: review.rating.value(),
            comment: review.comment.as_ref().map(|c| c.as_str().to_string()),
            created_at: review.created_at,
            username: review.username.as_str().to_string(),
            user_id: review.user_id.to_string(),
        }
    }
}

fn to_data(reviews: Vec<Review>) -> Vec<ReviewData> {
    reviews.iter().map(ReviewData::from).collect()
}
