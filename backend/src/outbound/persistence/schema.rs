//! Diesel table definitions matching the embedded migrations.

diesel::table! {
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        phone -> Nullable<Text>,
        location_city -> Nullable<Text>,
        location_state -> Nullable<Text>,
        location_country -> Nullable<Text>,
        location_latitude -> Nullable<Double>,
        location_longitude -> Nullable<Double>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    crops (id) {
        id -> Integer,
        name -> Text,
        image_url -> Nullable<Text>,
        scientific_name -> Nullable<Text>,
        description -> Nullable<Text>,
        origin -> Nullable<Text>,
        growing_conditions -> Nullable<Text>,
        planting_info -> Nullable<Text>,
        care_instructions -> Nullable<Text>,
        storage_info -> Nullable<Text>,
        nutritional_info -> Nullable<Text>,
        culinary_info -> Nullable<Text>,
        sunlight -> Text,
        water_needs -> Text,
        min_area_sq_m -> Double,
        soil_type -> Text,
        drainage -> Text,
        potted -> Bool,
        companion_crop_1 -> Nullable<Text>,
        companion_crop_2 -> Nullable<Text>,
        min_temp_c -> Double,
        max_temp_c -> Double,
        max_humidity_pct -> Double,
        grow_from_month -> Integer,
        grow_to_month -> Integer,
    }
}

diesel::table! {
    crop_schedule_templates (crop_name) {
        crop_name -> Text,
        growing_time -> Integer,
        watering_frequency -> Integer,
        fertilization_schedule -> Integer,
    }
}

diesel::table! {
    watering_schedules (id) {
        id -> Integer,
        user_id -> Integer,
        crop_id -> Integer,
        last_watered -> Nullable<Date>,
        next_watering -> Date,
        watering_frequency -> Integer,
        fertilization_schedule -> Integer,
        water_status -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    user_crops (id) {
        id -> Integer,
        user_id -> Integer,
        crop_id -> Integer,
    }
}

diesel::table! {
    notifications (id) {
        id -> Integer,
        user_id -> Integer,
        message -> Text,
        timestamp -> Timestamp,
        read_status -> Bool,
    }
}

diesel::table! {
    notification_preferences (user_id) {
        user_id -> Integer,
        watering_reminders -> Bool,
        weather_alerts -> Bool,
    }
}

diesel::table! {
    verification_tokens (id) {
        id -> Integer,
        user_id -> Integer,
        token -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(watering_schedules -> users (user_id));
diesel::joinable!(watering_schedules -> crops (crop_id));
diesel::joinable!(user_crops -> users (user_id));
diesel::joinable!(user_crops -> crops (crop_id));
diesel::joinable!(notifications -> users (user_id));
diesel::joinable!(notification_preferences -> users (user_id));
diesel::joinable!(verification_tokens -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    crops,
    crop_schedule_templates,
    watering_schedules,
    user_crops,
    notifications,
    notification_preferences,
    verification_tokens,
);
