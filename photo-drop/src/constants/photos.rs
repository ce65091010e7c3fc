/// Remote 200x200 JPEGs used as photo textures.
pub const PHOTO_URLS: [&str; 5] = [
    "https://fastly.picsum.photos/id/342/200/200.jpg?hmac=RWvP86WrI79J1lVaj-tfUFqvBHgAWnsRKVI9ER9Hdzc",
    "https://fastly.picsum.photos/id/683/200/200.jpg?hmac=gsOZBaeY42qvlTQSCuucn40FRUEnTdDYKl9q-YMcZh4",
    "https://fastly.picsum.photos/id/1051/200/200.jpg?hmac=s6d4ypEjpec8nvA2zqhWzx_6ogXYM2fJ_YJwaOM1CUA",
    "https://fastly.picsum.photos/id/992/200/200.jpg?hmac=PEyYl5Ux8jQFkEiXZfFSBThSPRQU1BsrdSMruB1lD4k",
    "https://fastly.picsum.photos/id/1016/200/200.jpg?hmac=VXVyuNaCgLl1UAdVez4gIo7AzMowZxMZVlIKlHMjgBw",
];

/// Content type handed to the image decoder for every fetched photo.
pub const PHOTO_MIME_TYPE: &str = "image/jpeg";
