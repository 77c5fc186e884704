//! HTML content for the UHSL Student Center pages.
//!
//! Exports the static pages served by the router: the homepage, the booking
//! form, and the two post-submission pages. Keep the HTML blobs here to
//! avoid runtime template dependencies; every page is a `&'static str`
//! handed to axum's `Html` response wrapper.
//!
/// Homepage for the student center
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>UHSL Student Center</title>
    <style>
        body { font-family: "Georgia", serif; text-align: center; padding-top: 50px; background-color: #f7f7f7; color: #333; }
        h1 { color: #cc0000; }
        p { max-width: 540px; margin: 0 auto 1rem; }
        a.button { display: inline-block; margin-top: 20px; padding: 12px 28px; background: #cc0000; color: #fff; text-decoration: none; font-weight: bold; border-radius: 4px; }
        a.button:hover { background: #a30000; }
    </style>
</head>
<body>
    <h1>UHSL Student Center</h1>
    <p>Welcome to the University Hill Student Learning center.</p>
    <p>Study rooms, labs and meeting spaces can be reserved for the current term. Pick a room, a date and a time slot and we will review your request.</p>
    <a class="button" href="/booking.html">Book a Room</a>
</body>
</html>"#;

/// Booking form page; posts to /submit-booking
pub const BOOKING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Book a Room - UHSL Student Center</title>
    <style>
        body { font-family: "Georgia", serif; text-align: center; padding-top: 50px; background-color: #f7f7f7; color: #333; }
        h1 { color: #cc0000; }
        form { display: inline-block; text-align: left; background: #fff; padding: 2rem; border: 1px solid #ddd; border-radius: 6px; }
        label { display: block; margin-top: 12px; font-weight: bold; }
        input, select { width: 100%; padding: 8px; margin-top: 4px; box-sizing: border-box; }
        button { margin-top: 20px; width: 100%; padding: 12px; background: #cc0000; color: #fff; border: none; font-weight: bold; cursor: pointer; border-radius: 4px; }
        button:hover { background: #a30000; }
        a { color: #cc0000; text-decoration: none; font-weight: bold; }
    </style>
</head>
<body>
    <h1>Book a Room</h1>
    <form action="/submit-booking" method="POST">
        <label for="name">Your Name</label>
        <input type="text" id="name" name="name" required>

        <label for="email">Student Email</label>
        <input type="email" id="email" name="email" required>

        <label for="roomType">Room</label>
        <select id="roomType" name="roomType" required>
            <option value="Study Room 1">Study Room 1</option>
            <option value="Study Room 2">Study Room 2</option>
            <option value="Lab A">Lab A</option>
            <option value="Lab B">Lab B</option>
            <option value="Conference Room">Conference Room</option>
        </select>

        <label for="bookingDate">Date</label>
        <input type="date" id="bookingDate" name="bookingDate" required>

        <label for="timeSlot">Time Slot</label>
        <select id="timeSlot" name="timeSlot" required>
            <option value="09:00">09:00 - 10:00</option>
            <option value="10:00">10:00 - 11:00</option>
            <option value="11:00">11:00 - 12:00</option>
            <option value="13:00">13:00 - 14:00</option>
            <option value="14:00">14:00 - 15:00</option>
            <option value="15:00">15:00 - 16:00</option>
        </select>

        <button type="submit">Submit Booking Request</button>
    </form>
    <p><a href="/index.html">Return to Homepage</a></p>
</body>
</html>"#;

/// Confirmation page shown after an accepted submission
pub const SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Booking Received - UHSL Student Center</title>
    <style>body { font-family: "Georgia", serif; text-align: center; padding-top: 50px; background-color: #f7f7f7; color: #333; } h1 { color: #cc0000; } a { color: #cc0000; text-decoration: none; font-weight: bold; }</style>
</head>
<body>
    <h1>Booking Request Received!</h1>
    <p>Your request has been successfully submitted for review.</p>
    <br>
    <a href="/index.html">Return to Homepage</a>
</body>
</html>"#;

/// Conflict page shown when the requested slot is already taken
pub const FAILURE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Booking Conflict - UHSL Student Center</title>
    <style>body { font-family: "Georgia", serif; text-align: center; padding-top: 50px; background-color: #f7f7f7; color: #333; } h1 { color: #cc0000; } a { color: #cc0000; text-decoration: none; font-weight: bold; }</style>
</head>
<body>
    <h1>Booking Conflict</h1>
    <p>We're sorry, but the room you selected is already booked for that specific date and time.</p>
    <p>Please try a different time or room.</p>
    <br>
    <a href="/booking.html">Try Booking Again</a>
</body>
</html>"#;
