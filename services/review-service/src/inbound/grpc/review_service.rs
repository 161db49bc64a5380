//! Request handlers for the `review.ReviewService` gRPC service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::domain::ports::ReviewCatalogue;
use crate::domain::{Error, Review, ReviewId, StoredReview};
use crate::proto;
use crate::proto::review_service_server::ReviewService;

/// gRPC adapter delegating every call to a [`ReviewCatalogue`].
#[derive(Clone)]
pub struct ReviewGrpcService {
    reviews: Arc<dyn ReviewCatalogue>,
}

impl ReviewGrpcService {
    /// Adapter over the given use-cases.
    pub fn new(reviews: Arc<dyn ReviewCatalogue>) -> Self {
        Self { reviews }
    }
}

fn parse_id(raw: &str) -> Result<ReviewId, Error> {
    ReviewId::parse(raw).map_err(|err| {
        debug!(raw, "rejected review id");
        Error::invalid_argument(err.to_string())
    })
}

fn into_domain(message: proto::Review) -> Review {
    Review {
        product_id: message.product_id,
        user_id: message.user_id,
        rating: message.rating,
        comment: message.comment,
        attributes: message.attributes.into_iter().collect(),
    }
}

fn into_message(stored: StoredReview) -> proto::Review {
    let StoredReview { id, review } = stored;
    proto::Review {
        review_id: id.as_str().to_owned(),
        product_id: review.product_id,
        user_id: review.user_id,
        rating: review.rating,
        comment: review.comment,
        attributes: review.attributes.into_iter().collect(),
    }
}

fn acknowledge(message: &str, review_id: String) -> Response<proto::ReviewResponse> {
    Response::new(proto::ReviewResponse {
        success: true,
        message: message.to_owned(),
        review_id,
    })
}

#[tonic::async_trait]
impl ReviewService for ReviewGrpcService {
    async fn create_review(
        &self,
        request: Request<proto::Review>,
    ) -> Result<Response<proto::ReviewResponse>, Status> {
        // Identifiers are store-assigned; any caller-supplied reviewID is dropped.
        let review = into_domain(request.into_inner());
        let id = self.reviews.create(review).await?;
        Ok(acknowledge(
            "Review created successfully",
            id.as_str().to_owned(),
        ))
    }

    async fn get_review(
        &self,
        request: Request<proto::ReviewRequest>,
    ) -> Result<Response<proto::Review>, Status> {
        let id = parse_id(&request.into_inner().review_id)?;
        let stored = self.reviews.get(id).await?;
        Ok(Response::new(into_message(stored)))
    }

    async fn update_review(
        &self,
        request: Request<proto::Review>,
    ) -> Result<Response<proto::ReviewResponse>, Status> {
        let message = request.into_inner();
        let id = parse_id(&message.review_id)?;
        self.reviews.update(id, into_domain(message)).await?;
        Ok(acknowledge("Review updated successfully", String::new()))
    }

    async fn delete_review(
        &self,
        request: Request<proto::ReviewRequest>,
    ) -> Result<Response<proto::ReviewResponse>, Status> {
        let id = parse_id(&request.into_inner().review_id)?;
        self.reviews.delete(id).await?;
        Ok(acknowledge("Review deleted successfully", String::new()))
    }

    async fn list_reviews(
        &self,
        _request: Request<proto::Empty>,
    ) -> Result<Response<proto::ReviewList>, Status> {
        let reviews = self.reviews.list().await?;
        Ok(Response::new(proto::ReviewList {
            reviews: reviews.into_iter().map(into_message).collect(),
        }))
    }
}
