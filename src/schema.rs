table! {
    submissions (id) {
        id -> Uuid,
        fullname -> Text,
        email -> Text,
        phone -> Text,
        service -> Text,
        message -> Text,
        date -> Timestamptz,
    }
}
