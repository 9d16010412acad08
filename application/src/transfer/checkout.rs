pub struct CheckoutDto {
    pub member_id: String,
    pub book_id: String,
}
