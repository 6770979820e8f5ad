pub mod u501_contact_inquiry;
