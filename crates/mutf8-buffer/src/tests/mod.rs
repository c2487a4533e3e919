mod arbitrary;
mod property_codec;
