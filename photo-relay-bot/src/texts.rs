//! User-facing strings (shown in Telegram).

pub const START: &str = "Hi! Send me an image and I will forward it to the channel.";
pub const ASK_CAPTION_OR_POLL: &str = "Image received. Do you need to add a caption or poll to it?";
pub const SEND_PHOTO: &str = "Please send a photo.";
pub const SEND_AS_PHOTO: &str = "Please send the image as a photo, not as a file.";
pub const NO_IMAGE: &str = "No image found. Please send an image first.";
pub const NO_IMAGE_FOR_APPROVAL: &str = "No image found to forward for approval.";
pub const NOTHING_TO_CONFIRM: &str = "Nothing to confirm. Send a caption or a /poll message first.";
pub const POLL_FORMAT_HINT: &str = "Format: /poll Question|Option 1|Option 2";

pub const FORWARDED_PLAIN: &str = "Image forwarded to the channel for approval.";
pub const FORWARDED_CAPTION: &str = "Image with caption forwarded to the channel for approval.";
pub const FORWARDED_POLL: &str = "Image with poll forwarded to the channel for approval.";

/// Caption on the owner's copy of a photo-only submission.
pub const APPROVAL_REQUEST: &str = "Approval request";
pub const APPROVED: &str = "Message approved and forwarded to the channel.";
pub const DISAPPROVED: &str = "Message disapproved.";
pub const APPROVAL_NOT_FOUND: &str = "Approval item not found or already processed.";
pub const PUBLISH_FAILED: &str = "Posting to the channel failed; the item is still pending. Try again later.";
pub const APPROVAL_LOST: &str = "Posting to the channel failed and the item could not be kept pending. Ask the submitter to send it again.";
pub const OWNER_ONLY: &str = "Only the owner can approve or disapprove submissions.";
pub const SUBMITTER_APPROVED: &str = "Your submission was approved and posted to the channel.";
pub const SUBMITTER_DISAPPROVED: &str = "Your submission was not approved.";

pub const BUTTON_YES: &str = "Yes";
pub const BUTTON_NO: &str = "No";
pub const BUTTON_CONFIRM: &str = "Confirm";
pub const BUTTON_NEW_INPUT: &str = "New Input";
pub const BUTTON_APPROVE: &str = "Approve";
pub const BUTTON_DISAPPROVE: &str = "Disapprove";

/// Shown after "Yes" and "New Input".
pub const GUIDE: &str = "Send me the caption or poll.\n\n\
To add a caption:\n\
- Just type the caption text and send it.\n\n\
To create a poll:\n\
- Start your message with /poll followed by the question and each option separated by a vertical bar |.\n\
- Format: /poll Question|Option 1|Option 2|Option 3\n\
- Example: /poll Which color do you prefer?|Red|Blue|Green\n\n\
Important:\n\
- Polls must have at least 2 options (and up to 10).\n\
- The first item after /poll is the poll question; the remaining items are the options.\n\
- Avoid using | inside option text (use it only as the separator).\n\n\
After you send the caption or /poll message the bot will preview the photo with your caption or poll.\n\
Tap Confirm to forward it for approval, or New Input to change it.";

pub const CAPTION_TOO_LONG: &str = "Captions can be at most 1024 characters. Please send a shorter caption.";
pub const FORWARD_FAILED: &str = "Could not forward your submission right now. Please try again.";
