pub mod pe1;
pub mod pe2;
pub mod pe3;
pub mod pe4;
pub mod pe5;
pub mod pe6;
pub mod pe7;
pub mod pe8;
pub mod pe9;
pub mod pe10;
pub mod pe12;
pub mod pe14;
pub mod pe15;
pub mod pe16;
pub mod pe17;
pub mod pe18;
pub mod pe19;
pub mod pe20;
pub mod pe21;
pub mod pe22;
pub mod pe23;
pub mod pe24;
pub mod pe25;
pub mod pe26;
pub mod pe27;
pub mod pe30;
pub mod pe31;
pub mod pe32;
pub mod pe33;
pub mod pe34;
pub mod pe35;
pub mod pe36;
pub mod pe37;
pub mod pe38;
pub mod pe39;
pub mod pe40;
pub mod pe41;
pub mod pe42;
pub mod pe43;
pub mod pe46;
pub mod pe47;
pub mod pe48;
pub mod pe49;
pub mod pe50;
pub mod pe52;
pub mod pe53;
pub mod pe54;
pub mod pe55;
pub mod pe56;
pub mod pe57;
pub mod pe59;
pub mod pe60;
pub mod pe61;
pub mod pe62;
pub mod pe63;
pub mod pe64;
pub mod pe65;
pub mod pe66;
pub mod pe67;
pub mod pe68;
pub mod pe69;
pub mod pe70;
pub mod pe71;
pub mod pe72;
pub mod pe73;
pub mod pe74;
pub mod pe75;
pub mod pe76;
pub mod pe77;
pub mod pe78;
pub mod pe79;
pub mod pe80;
pub mod pe81;
pub mod pe82;
pub mod pe83;
pub mod pe84;
pub mod pe85;
pub mod pe86;
pub mod pe87;
pub mod pe88;
pub mod pe89;
pub mod pe90;
pub mod pe91;
pub mod pe92;
pub mod pe93;
pub mod pe95;
pub mod pe96;
pub mod pe97;
pub mod pe98;
pub mod pe99;
