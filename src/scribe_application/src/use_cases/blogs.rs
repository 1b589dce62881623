use scribe_core::{
    Blog, BlogFilter, BlogId, BlogRepository, Comment, CommentFilter, CommentId,
    CommentRepository, DateRange, NewBlog, NewComment, RepositoryError, UserId,
};

/// Blog and comment operations. Each lookup builds a filter with exactly one
/// field set and hands it to the repository; errors pass through unchanged.
pub struct BlogUseCase<'a, B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    blog_repository: &'a B,
    comment_repository: &'a C,
}

impl<'a, B, C> BlogUseCase<'a, B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    pub fn new(blog_repository: &'a B, comment_repository: &'a C) -> Self {
        Self {
            blog_repository,
            comment_repository,
        }
    }

    #[tracing::instrument(name = "BlogUseCase::create", skip(self, blog), fields(writer_id = %blog.writer_id))]
    pub async fn create(&self, blog: NewBlog) -> Result<Blog, RepositoryError> {
        self.blog_repository.create(blog).await
    }

    #[tracing::instrument(name = "BlogUseCase::list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Blog>, RepositoryError> {
        self.blog_repository.find(&BlogFilter::default()).await
    }

    #[tracing::instrument(name = "BlogUseCase::update", skip(self, blog), fields(id = %blog.id))]
    pub async fn update(&self, blog: Blog) -> Result<Blog, RepositoryError> {
        self.blog_repository.update(blog).await
    }

    #[tracing::instrument(name = "BlogUseCase::delete", skip(self))]
    pub async fn delete(&self, id: &BlogId) -> Result<(), RepositoryError> {
        self.blog_repository.delete(id).await
    }

    #[tracing::instrument(name = "BlogUseCase::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: &BlogId) -> Result<Blog, RepositoryError> {
        self.blog_repository.find_by_id(id).await
    }

    #[tracing::instrument(name = "BlogUseCase::get_by_writer_id", skip(self))]
    pub async fn get_by_writer_id(&self, writer_id: UserId) -> Result<Vec<Blog>, RepositoryError> {
        self.blog_repository
            .find(&BlogFilter::by_writer(writer_id))
            .await
    }

    #[tracing::instrument(name = "BlogUseCase::get_by_status", skip(self))]
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Blog>, RepositoryError> {
        self.blog_repository
            .find(&BlogFilter::by_status(status))
            .await
    }

    #[tracing::instrument(name = "BlogUseCase::get_by_modification_date_range", skip(self))]
    pub async fn get_by_modification_date_range(
        &self,
        range: DateRange,
    ) -> Result<Vec<Blog>, RepositoryError> {
        self.blog_repository
            .find(&BlogFilter::modified_within(range))
            .await
    }

    #[tracing::instrument(name = "BlogUseCase::get_comments", skip(self))]
    pub async fn get_comments(&self, blog_id: BlogId) -> Result<Vec<Comment>, RepositoryError> {
        self.comment_repository
            .find(&CommentFilter::by_blog(blog_id))
            .await
    }

    #[tracing::instrument(name = "BlogUseCase::create_comment", skip(self, comment), fields(blog_id = %comment.blog_id))]
    pub async fn create_comment(&self, comment: NewComment) -> Result<Comment, RepositoryError> {
        self.comment_repository.create(comment).await
    }

    /// A comment is only visible under the blog it was posted to.
    #[tracing::instrument(name = "BlogUseCase::get_comment", skip(self))]
    pub async fn get_comment(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
    ) -> Result<Comment, RepositoryError> {
        let comment = self.comment_repository.find_by_id(comment_id).await?;
        if &comment.blog_id != blog_id {
            return Err(RepositoryError::NotFound);
        }

        Ok(comment)
    }
}
