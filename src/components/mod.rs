pub mod admin_hotel_reservations;
pub mod admin_panel;
pub mod admin_user_reservations;
pub mod app;
pub mod booking_form;
pub mod guard;
pub mod hotel_details;
pub mod hotel_list;
pub mod load_amenity;
pub mod load_hotel;
pub mod login;
pub mod navbar;
pub mod profile;
pub mod reservation_details;
pub mod signup;
pub mod user_details;
pub mod user_reservations;

pub use admin_hotel_reservations::AdminHotelReservations;
pub use admin_panel::AdminPanel;
pub use admin_user_reservations::AdminUserReservations;
pub use app::App;
pub use booking_form::BookingForm;
pub use guard::Guard;
pub use hotel_details::HotelDetails;
pub use hotel_list::HotelList;
pub use load_amenity::LoadAmenity;
pub use load_hotel::LoadHotel;
pub use login::Login;
pub use navbar::Navbar;
pub use profile::Profile;
pub use reservation_details::ReservationDetails;
pub use signup::Signup;
pub use user_details::UserDetails;
pub use user_reservations::UserReservations;
